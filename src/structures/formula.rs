/*!
First-order formulas and the terms they are built from.

A formula is a closed algebraic datatype, with one variant for each node kind a
[parser](crate::parser) may produce, and dispatch throughout the library is by
pattern match.
Terms are restricted to variables and constants --- there are no function
symbols of positive arity.

# Example
```rust
# use heron_fol::structures::formula::{FolFormula, Term};
let formula = FolFormula::all(
    "x",
    FolFormula::imp(
        FolFormula::application("P", vec![Term::Variable("x".to_string())]),
        FolFormula::application("Q", vec![Term::Variable("x".to_string())]),
    ),
);

assert_eq!(formula.to_string(), "all x.(P(x) -> Q(x))");
assert!(formula.free().is_empty());
```
*/

use std::collections::BTreeSet;

/// A term, either a variable or a constant, identified by name.
///
/// Whether a name denotes a variable or a constant is settled by the parser:
/// an identifier is a variable exactly when an enclosing binder binds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// A bound (or, for hand-built formulas, free) variable.
    Variable(String),

    /// A named individual or event.
    Constant(String),
}

impl Term {
    /// The name of the term, variable or constant.
    pub fn name(&self) -> &str {
        match self {
            Self::Variable(name) | Self::Constant(name) => name,
        }
    }

    /// A readable tag for the node kind, used when recording argument kinds.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Variable(_) => "variable",
            Self::Constant(_) => "constant",
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A first-order formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FolFormula {
    /// Existential quantification of `term` by `variable`.
    Exists {
        variable: String,
        term: Box<FolFormula>,
    },

    /// Universal quantification of `term` by `variable`.
    All {
        variable: String,
        term: Box<FolFormula>,
    },

    /// A lambda abstraction, applied through [apply](FolFormula::apply).
    Lambda {
        variable: String,
        term: Box<FolFormula>,
    },

    /// Negation.
    Negated { term: Box<FolFormula> },

    /// Conjunction.
    And {
        first: Box<FolFormula>,
        second: Box<FolFormula>,
    },

    /// Disjunction.
    Or {
        first: Box<FolFormula>,
        second: Box<FolFormula>,
    },

    /// Material implication.
    Imp {
        first: Box<FolFormula>,
        second: Box<FolFormula>,
    },

    /// A predicate applied to terms.
    Application { pred: String, args: Vec<Term> },

    /// Equality between two terms.
    Equality { left: Term, right: Term },
}

impl FolFormula {
    /// An existential quantification.
    pub fn exists(variable: impl Into<String>, term: FolFormula) -> Self {
        Self::Exists {
            variable: variable.into(),
            term: Box::new(term),
        }
    }

    /// A universal quantification.
    pub fn all(variable: impl Into<String>, term: FolFormula) -> Self {
        Self::All {
            variable: variable.into(),
            term: Box::new(term),
        }
    }

    /// A lambda abstraction.
    pub fn lambda(variable: impl Into<String>, term: FolFormula) -> Self {
        Self::Lambda {
            variable: variable.into(),
            term: Box::new(term),
        }
    }

    /// The negation of `term`.
    pub fn negated(term: FolFormula) -> Self {
        Self::Negated {
            term: Box::new(term),
        }
    }

    /// The conjunction of `first` and `second`.
    pub fn and(first: FolFormula, second: FolFormula) -> Self {
        Self::And {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// The disjunction of `first` and `second`.
    pub fn or(first: FolFormula, second: FolFormula) -> Self {
        Self::Or {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// The implication from `first` to `second`.
    pub fn imp(first: FolFormula, second: FolFormula) -> Self {
        Self::Imp {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// The application of predicate `pred` to `args`.
    pub fn application(pred: impl Into<String>, args: Vec<Term>) -> Self {
        Self::Application {
            pred: pred.into(),
            args,
        }
    }

    /// The equality of `left` and `right`.
    pub fn equality(left: Term, right: Term) -> Self {
        Self::Equality { left, right }
    }

    /// The left-to-right fold of `formulas` under [And](FolFormula::And).
    ///
    /// Returns None on an empty list, and the sole formula on a singleton.
    pub fn conjoin(formulas: Vec<FolFormula>) -> Option<FolFormula> {
        let mut formulas = formulas.into_iter();
        let first = formulas.next()?;
        Some(formulas.fold(first, FolFormula::and))
    }

    /// The left-to-right fold of `formulas` under [Or](FolFormula::Or).
    pub fn disjoin(formulas: Vec<FolFormula>) -> Option<FolFormula> {
        let mut formulas = formulas.into_iter();
        let first = formulas.next()?;
        Some(formulas.fold(first, FolFormula::or))
    }

    /// The set of free variable names in the formula.
    pub fn free(&self) -> BTreeSet<String> {
        match self {
            Self::Exists { variable, term }
            | Self::All { variable, term }
            | Self::Lambda { variable, term } => {
                let mut vars = term.free();
                vars.remove(variable);
                vars
            }

            Self::Negated { term } => term.free(),

            Self::And { first, second }
            | Self::Or { first, second }
            | Self::Imp { first, second } => {
                let mut vars = first.free();
                vars.extend(second.free());
                vars
            }

            Self::Application { args, .. } => args
                .iter()
                .filter_map(|arg| match arg {
                    Term::Variable(name) => Some(name.clone()),
                    Term::Constant(_) => None,
                })
                .collect(),

            Self::Equality { left, right } => [left, right]
                .into_iter()
                .filter_map(|side| match side {
                    Term::Variable(name) => Some(name.clone()),
                    Term::Constant(_) => None,
                })
                .collect(),
        }
    }

    /// The formula with every free occurrence of `variable` replaced by `value`.
    ///
    /// A binder for the same name shields its body.
    pub fn substitute(&self, variable: &str, value: &Term) -> FolFormula {
        let on_term = |term: &Term| match term {
            Term::Variable(name) if name == variable => value.clone(),
            other => other.clone(),
        };

        match self {
            Self::Exists { variable: v, term } => {
                if v == variable {
                    self.clone()
                } else {
                    Self::exists(v.clone(), term.substitute(variable, value))
                }
            }

            Self::All { variable: v, term } => {
                if v == variable {
                    self.clone()
                } else {
                    Self::all(v.clone(), term.substitute(variable, value))
                }
            }

            Self::Lambda { variable: v, term } => {
                if v == variable {
                    self.clone()
                } else {
                    Self::lambda(v.clone(), term.substitute(variable, value))
                }
            }

            Self::Negated { term } => Self::negated(term.substitute(variable, value)),

            Self::And { first, second } => Self::and(
                first.substitute(variable, value),
                second.substitute(variable, value),
            ),

            Self::Or { first, second } => Self::or(
                first.substitute(variable, value),
                second.substitute(variable, value),
            ),

            Self::Imp { first, second } => Self::imp(
                first.substitute(variable, value),
                second.substitute(variable, value),
            ),

            Self::Application { pred, args } => Self::Application {
                pred: pred.clone(),
                args: args.iter().map(on_term).collect(),
            },

            Self::Equality { left, right } => Self::Equality {
                left: on_term(left),
                right: on_term(right),
            },
        }
    }

    /// Beta-reduction: the body of a lambda with its variable replaced by `argument`.
    ///
    /// Applying anything other than a lambda returns the formula unchanged.
    pub fn apply(&self, argument: &Term) -> FolFormula {
        match self {
            Self::Lambda { variable, term } => term.substitute(variable, argument),
            other => other.clone(),
        }
    }

    /// Normalisation after beta-reduction.
    ///
    /// As application is restricted to named predicates, a formula contains no
    /// redex and is its own normal form.
    pub fn simplify(self) -> FolFormula {
        self
    }
}

impl std::fmt::Display for FolFormula {
    /// The surface syntax accepted by [LogicParser](crate::parser::LogicParser).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exists { variable, term } => write!(f, "exists {variable}.{term}"),
            Self::All { variable, term } => write!(f, "all {variable}.{term}"),
            Self::Lambda { variable, term } => write!(f, "\\{variable}.{term}"),
            Self::Negated { term } => write!(f, "-{term}"),
            Self::And { first, second } => write!(f, "({first} & {second})"),
            Self::Or { first, second } => write!(f, "({first} | {second})"),
            Self::Imp { first, second } => write!(f, "({first} -> {second})"),
            Self::Application { pred, args } => {
                let args = args
                    .iter()
                    .map(|arg| arg.name())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{pred}({args})")
            }
            Self::Equality { left, right } => write!(f, "({left} = {right})"),
        }
    }
}

#[cfg(test)]
mod formula_tests {
    use super::*;

    fn var(name: &str) -> Term {
        Term::Variable(name.to_string())
    }

    fn cst(name: &str) -> Term {
        Term::Constant(name.to_string())
    }

    #[test]
    fn substitution_replaces_free_occurrences() {
        let formula = FolFormula::imp(
            FolFormula::application("P", vec![var("x")]),
            FolFormula::application("Q", vec![var("x")]),
        );

        let grounded = formula.substitute("x", &cst("a"));
        assert_eq!(grounded.to_string(), "(P(a) -> Q(a))");
        assert!(grounded.free().is_empty());
    }

    #[test]
    fn substitution_respects_shadowing() {
        let inner = FolFormula::exists("x", FolFormula::application("P", vec![var("x")]));
        let formula = FolFormula::and(FolFormula::application("Q", vec![var("x")]), inner.clone());

        let grounded = formula.substitute("x", &cst("a"));
        assert_eq!(grounded.to_string(), "(Q(a) & exists x.P(x))");
    }

    #[test]
    fn beta_reduction() {
        let abstraction = FolFormula::lambda("x", FolFormula::application("P", vec![var("x")]));
        let reduced = abstraction.apply(&cst("a")).simplify();
        assert_eq!(reduced.to_string(), "P(a)");
    }

    #[test]
    fn folds_are_left_first() {
        let atoms = vec![
            FolFormula::application("P", vec![cst("a")]),
            FolFormula::application("P", vec![cst("b")]),
            FolFormula::application("P", vec![cst("c")]),
        ];

        let folded = FolFormula::disjoin(atoms).unwrap();
        assert_eq!(folded.to_string(), "((P(a) | P(b)) | P(c))");
    }

    #[test]
    fn free_variables_of_open_formulas() {
        let open = FolFormula::all(
            "x",
            FolFormula::and(
                FolFormula::application("P", vec![var("x")]),
                FolFormula::application("Q", vec![var("y")]),
            ),
        );

        assert_eq!(open.free(), BTreeSet::from(["y".to_string()]));
    }
}
