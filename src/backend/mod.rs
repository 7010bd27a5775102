/*!
The SAT backend seam.

The pipeline ends with a CNF clause list of signed integers, and any
conflict-driven clause-learning solver able to answer with a model or an
unsatisfiability verdict will do.
[SatSolver] is the trait a backend implements; [SplrSolver] is the bundled
backend over the pure-Rust [splr](https://crates.io/crates/splr) solver,
available behind the on-by-default `splr` feature.

A backend is handed each query whole: there is no incremental interface, and a
backend error is surfaced verbatim and non-retryable.
*/

#[cfg(feature = "splr")]
mod splr;
#[cfg(feature = "splr")]
pub use splr::SplrSolver;

use crate::types::err::SolverError;

/// The answer of a SAT backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The clauses are satisfiable, with a witnessing assignment of signed
    /// variable ids.
    Satisfiable(Vec<i32>),

    /// The clauses are unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable(_) => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A complete SAT solver over integer CNF.
pub trait SatSolver {
    /// The verdict on `clauses`, read as a conjunction of disjunctions with
    /// DIMACS literal conventions.
    fn solve(&mut self, clauses: &[Vec<i32>]) -> Result<Verdict, SolverError>;
}
