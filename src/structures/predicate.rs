//! Predicates --- the relational vocabulary of a discourse.

/// The name of the synthetic predicate standing in for equality.
pub const EQUALITY: &str = "EQUALITY";

/// A predicate constant, with the arity and argument kinds of its first occurrence.
#[derive(Clone, Debug)]
pub struct Predicate {
    /// The surface name.
    pub name: String,

    /// The number of arguments.
    pub arity: usize,

    /// A kind tag per argument, as observed at the first occurrence.
    pub arg_kinds: Vec<String>,
}

impl Predicate {
    /// A fresh predicate with the given argument kinds.
    pub fn new(name: impl Into<String>, arg_kinds: Vec<String>) -> Self {
        Predicate {
            name: name.into(),
            arity: arg_kinds.len(),
            arg_kinds,
        }
    }

    /// The synthetic equality predicate, binary over any kinds.
    pub fn equality() -> Self {
        Predicate::new(EQUALITY, vec!["any".to_string(), "any".to_string()])
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Predicate {}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}
