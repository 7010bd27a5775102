/*!
Configuration of a context.

All configuration for a check is carried by the [Config] of its context, read
at each pipeline stage and never mutated by a check.
*/

use crate::codec::CODE_BASE;

/// What a quantifier over a kind with no members grounds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyDomainPolicy {
    /// Classical semantics: an existential is unsatisfiable, a universal holds.
    Classical,

    /// Surface [EmptyDomain](crate::types::err::GroundingError::EmptyDomain) instead.
    Error,
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Conjoin each premise with witnessed non-empty-class axioms before
    /// grounding (see [closure](crate::grounding::closure)).
    ///
    /// This is a closed-world reading --- every named class is inhabited ---
    /// and changes the logical semantics of a check.
    pub class_closure: bool,

    /// The reading of quantifiers over empty kinds.
    pub empty_domain: EmptyDomainPolicy,

    /// The code point offset for coded atoms.
    pub code_base: u32,
}

impl Default for Config {
    /// Closure on, classical empty domains, atoms coded from U+0100.
    fn default() -> Self {
        Config {
            class_closure: true,
            empty_domain: EmptyDomainPolicy::Classical,
            code_base: CODE_BASE,
        }
    }
}
