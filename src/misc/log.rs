/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the pipeline, narrowed by target.
No log implementation is provided; for details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [discourse model](crate::discourse).
    pub const DISCOURSE: &str = "discourse";

    /// Logs related to the [grounder](crate::grounding).
    pub const GROUNDING: &str = "grounding";

    /// Logs related to [existential closure](crate::grounding::closure).
    pub const CLOSURE: &str = "closure";

    /// Logs related to the [Tseitin transform](crate::tseitin).
    pub const TSEITIN: &str = "tseitin";

    /// Logs related to the [backend](crate::backend) and its dispatch.
    pub const SOLVER: &str = "solver";

    /// Logs related to a [check](crate::context) as a whole.
    pub const CHECK: &str = "check";
}
