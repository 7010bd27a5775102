/*!
A library for deciding entailment between first-order sentences over finite,
formula-induced domains.

Given premises P₁…Pₙ and a conclusion C --- closed first-order sentences ---
heron_fol answers whether P₁ ∧ … ∧ Pₙ ⊨ C, by reducing the question to
propositional unsatisfiability and dispatching to a conflict-driven
clause-learning SAT solver.

The reduction is classical grounding: the domain of discourse is not given but
*read off the formulas themselves* --- every named constant is a member, every
named class may be axiomatised as inhabited --- so the question is decidable
and the reduction exact.

# Orientation

A check flows through a fixed pipeline, each stage its own module:

- A [discourse model](crate::discourse) scans the parsed formula and extracts
  its finite population: constants (individuals and events) and the predicate
  signature, in stable insertion order.
- The [grounder](crate::grounding) eliminates quantifiers by expanding ∀ and ∃
  into finite conjunctions and disjunctions over the population, and encodes
  the result as a propositional string whose atoms are single code points
  assigned by the [codec](crate::codec).
- The [Tseitin transform](crate::tseitin) converts the string to an
  equisatisfiable CNF clause list in linear size.
- The [numeric mapping](crate::dimacs) assigns DIMACS-style signed integers,
  and the [backend](crate::backend) answers satisfiable-with-model or
  unsatisfiable.
- The [context](crate::context) orchestrates: it negates the implication,
  drives the stages, and decodes verdict and countermodel into a
  [report](crate::reports).

Sentences arrive through a [parser](crate::parser) seam; a bundled
recursive-descent parser reads the nltk-flavoured surface syntax.

# Examples

+ An entailment which holds, and one which fails with a countermodel.

```rust
# use heron_fol::{config::Config, context::Context};
let mut ctx = Context::from_config(Config::default());

let chained = ctx.check_implication(
    &["all x. (P(x) -> Q(x))", "all x. (Q(x) -> R(x))"],
    "all x. (P(x) -> R(x))",
).unwrap();
assert!(chained.holds());

let unsupported = ctx.check_implication(&["all x. (P(x) -> Q(x))"], "Q(a)").unwrap();
assert!(!unsupported.holds());

let model = unsupported.countermodel().unwrap();
assert_eq!(model.value_of("Q", &["a"]), Some(false));
```

+ Derived checks on pairs of sentences.

```rust
# use heron_fol::{config::Config, context::Context};
let mut ctx = Context::from_config(Config::default());

assert!(ctx.equivalent("(P(a) & Q(a))", "(Q(a) & P(a))").unwrap());
assert!(ctx.negation_of("P(a)", "-P(a)").unwrap());
```

# Semantics, precisely

Two readings are configurable through [Config](crate::config::Config):

- **Class closure** (on by default) conjoins each premise with a witnessed
  axiom `∃x. P(x)` per unary predicate, a closed-world reading under which
  every named class is inhabited.
  It changes the logical semantics: see
  [closure](crate::grounding::closure).
- **Empty domains** follow classical semantics by default (an existential over
  an empty kind is unsatisfiable, a universal holds); a policy switch makes
  the case a hard error instead.

With closure off, a check agrees with classical entailment over the finite
domain named by the formulas --- the property tests drive exactly this
agreement against exhaustive truth-table evaluation.

# Cost

Grounding is exponential in quantifier nesting depth (the grounded string is
O(|domain|^q)), and everything after it linear.
The blow-up is inherent to the reduction; callers control it through the
number of constants and the nesting of their sentences.

# Logs

To help diagnose issues, calls to [log!](log) are made throughout the
pipeline, narrowed by the targets listed in [misc::log].
No log implementation is provided.
*/

pub mod backend;
pub mod codec;
pub mod config;
pub mod context;
pub mod dimacs;
pub mod discourse;
pub mod grounding;
pub mod parser;
pub mod reports;
pub mod structures;
pub mod tseitin;
pub mod types;

pub mod generic;
pub mod misc;
