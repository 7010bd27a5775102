//! The bundled [splr](https://crates.io/crates/splr) backend.

use crate::{
    backend::{SatSolver, Verdict},
    misc::log::targets,
    types::err::SolverError,
};

use splr::{types::SolverError as SplrError, Certificate};

/// A fresh splr solver per query.
#[derive(Clone, Copy, Debug, Default)]
pub struct SplrSolver;

impl SatSolver for SplrSolver {
    fn solve(&mut self, clauses: &[Vec<i32>]) -> Result<Verdict, SolverError> {
        log::debug!(
            target: targets::SOLVER,
            "Dispatching {} clause(s) to splr",
            clauses.len()
        );

        let verdict = match Certificate::try_from(clauses.to_vec()) {
            Ok(Certificate::SAT(model)) => Verdict::Satisfiable(model),

            Ok(Certificate::UNSAT) => Verdict::Unsatisfiable,

            // splr reports some trivially unsatisfiable inputs as build
            // conflicts rather than certificates.
            Err(SplrError::Inconsistent | SplrError::EmptyClause) => Verdict::Unsatisfiable,
            Err(SplrError::RootLevelConflict(_)) => Verdict::Unsatisfiable,

            Err(e) => return Err(SolverError::Backend(e.to_string())),
        };

        log::debug!(target: targets::SOLVER, "splr answered {verdict}");
        Ok(verdict)
    }
}
