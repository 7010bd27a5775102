/*!
The context --- within which sentences are parsed, reduced, and checked.

Strictly, a [GenericContext] and a [Context].

The generic context is parameterised to its SAT backend, which keeps the
reduction pipeline agnostic of the solver behind the
[SatSolver](crate::backend::SatSolver) seam.
[Context] fixes the backend to the bundled
[SplrSolver](crate::backend::SplrSolver), and
[from_config](Context::from_config) installs the bundled
[LogicParser](crate::parser::LogicParser), so most uses need neither
parameter.

Each check is a self-contained, synchronous computation owning its discourse
model, codec, Tseitin state, and numeric mapping; nothing is shared across
checks, and a context may be reused after any error.

# Example
```rust
# use heron_fol::{config::Config, context::Context};
let mut ctx = Context::from_config(Config::default());

let report = ctx
    .check_implication(&["all x. (P(x) -> Q(x))", "P(a)"], "Q(a)")
    .unwrap();
assert!(report.holds());
```
*/

mod generic;
pub use generic::GenericContext;

#[cfg(feature = "splr")]
mod specific;
#[cfg(feature = "splr")]
pub use specific::Context;

/// The sentence negated: a `-` prefixed, or a leading `-` stripped.
///
/// ```rust
/// # use heron_fol::context::negate;
/// assert_eq!(negate("P(a)"), "-P(a)");
/// assert_eq!(negate(&negate("P(a)")), "P(a)");
/// ```
pub fn negate(sentence: &str) -> String {
    match sentence.strip_prefix('-') {
        Some(stripped) => stripped.to_string(),
        None => format!("-{sentence}"),
    }
}
