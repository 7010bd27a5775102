/*!
Reports on the outcome of a check, and decoded countermodels.
*/

/// The outcome of an entailment check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// The conclusion follows from the premises: the checked formula is unsatisfiable.
    Entailed,

    /// The conclusion does not follow, witnessed by a model of the premises
    /// on which the conclusion fails.
    NotEntailed(Model),
}

impl Report {
    /// True iff the entailment holds.
    pub fn holds(&self) -> bool {
        matches!(self, Report::Entailed)
    }

    /// The countermodel, if the entailment failed.
    pub fn countermodel(&self) -> Option<&Model> {
        match self {
            Report::Entailed => None,
            Report::NotEntailed(model) => Some(model),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "Entailed"),
            Self::NotEntailed(_) => write!(f, "Not entailed"),
        }
    }
}

/// A decoded model: a valuation of the ground atoms of the checked formula.
///
/// Auxiliary atoms introduced by the Tseitin transform are filtered out before
/// decoding, so every literal here is a predicate over named constants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    /// The valued ground atoms, in the numeric mapping's order.
    pub literals: Vec<GroundLiteral>,
}

impl Model {
    /// The value the model gives to `predicate` applied to `args`, if any.
    pub fn value_of(&self, predicate: &str, args: &[&str]) -> Option<bool> {
        self.literals
            .iter()
            .find(|literal| {
                literal.atom.predicate == predicate && literal.atom.args == args
            })
            .map(|literal| literal.polarity)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals = self
            .literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{literals}")
    }
}

/// A ground atom, decoded to its predicate and argument names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroundAtom {
    /// The predicate name.
    pub predicate: String,

    /// The argument names, truncated to the predicate's arity.
    pub args: Vec<String>,
}

impl std::fmt::Display for GroundAtom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.predicate, self.args.join(", "))
    }
}

/// A ground atom paired with the value a model gives it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroundLiteral {
    /// The value of the atom.
    pub polarity: bool,

    /// The atom.
    pub atom: GroundAtom,
}

impl std::fmt::Display for GroundLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}
