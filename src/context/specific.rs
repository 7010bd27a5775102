use crate::{
    backend::SplrSolver,
    config::Config,
    parser::LogicParser,
};

use super::GenericContext;

/// A context which uses [SplrSolver] as its SAT backend.
pub type Context = GenericContext<SplrSolver>;

impl Context {
    /// Creates a context from some given configuration, with the bundled
    /// parser and backend.
    pub fn from_config(config: Config) -> Self {
        GenericContext::new(config, Box::new(LogicParser), SplrSolver)
    }
}
