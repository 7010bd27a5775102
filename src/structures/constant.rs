//! Constants --- the named individuals and events of a discourse.

/// The surface prefix marking a constant as an event.
pub const EVENT_PREFIX: &str = "Ev_";

/// The kind of a constant, settled by surface conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConstantKind {
    /// An individual of the domain.
    Individual,

    /// A (neo-Davidsonian) event.
    Event,
}

impl ConstantKind {
    /// The kind of the constant named `name`: an event iff the name starts with [EVENT_PREFIX].
    pub fn of_constant(name: &str) -> Self {
        match name.starts_with(EVENT_PREFIX) {
            true => Self::Event,
            false => Self::Individual,
        }
    }

    /// The kind quantified over by the variable named `name`: an event iff the name starts with `e`.
    pub fn of_variable(name: &str) -> Self {
        match name.starts_with('e') {
            true => Self::Event,
            false => Self::Individual,
        }
    }
}

impl std::fmt::Display for ConstantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Event => write!(f, "event"),
        }
    }
}

/// A constant of the language, representing one member of the domain.
///
/// Identity is by name: two constants with the same name are the same member,
/// whatever their kinds.
#[derive(Clone, Debug)]
pub struct Constant {
    /// The kind of the constant.
    pub kind: ConstantKind,

    /// The surface name.
    pub name: String,
}

impl Constant {
    /// A fresh constant, with its kind read off the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Constant {
            kind: ConstantKind::of_constant(&name),
            name,
        }
    }
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Constant {}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
