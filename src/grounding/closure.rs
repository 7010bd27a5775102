/*!
Existential closure --- non-empty-class axioms and their witnesses.

A premise which quantifies existentially over a class with no asserted member
is trivially falsified once grounded, as the expansion is empty.
Closure counters this with a closed-world reading: every named class is
inhabited.

[class_closure] collects the unary predicates of a premise, synthesises
`∃x. P(x)` for each, conjoins the axioms, replaces each axiom's existential
with a named witness constant, and returns the premise conjoined with the
result.
Grounding then finds a member for every class the premise mentions.

Witness naming: the hyphen-joined, lowercased names of the unary predicates
applying to the bound variable in the body, with the
[event prefix](crate::structures::constant::EVENT_PREFIX) for event variables.
So the witness of `∃x. P(x)` is `p`, and of `∃e. Run(e)` is `Ev_run`.
An existential with no applying unary predicate keeps its quantifier.

This changes the logical semantics, and is switched by
[Config::class_closure](crate::config::Config).
*/

use crate::{
    discourse::DiscourseModel,
    misc::log::targets,
    structures::{
        constant::EVENT_PREFIX,
        formula::{FolFormula, Term},
    },
};

/// `formula` conjoined with witnessed non-empty-class axioms, one per unary
/// predicate. Returns the formula unchanged when it has no unary predicate.
pub fn class_closure(formula: &FolFormula) -> FolFormula {
    match nonempty_class_axioms(formula) {
        None => formula.clone(),
        Some(axioms) => {
            let witnessed = witnesses(&axioms);
            log::debug!(target: targets::CLOSURE, "Closure axioms: {witnessed}");
            FolFormula::and(formula.clone(), witnessed)
        }
    }
}

/// The conjunction of `∃x. P(x)` for each unary predicate of `formula`, in
/// signature order. None when there is no unary predicate.
pub fn nonempty_class_axioms(formula: &FolFormula) -> Option<FolFormula> {
    let mut probe = DiscourseModel::new();
    probe.populate(formula);

    let axioms = probe
        .unary_predicates()
        .map(|p| {
            FolFormula::exists(
                "x",
                FolFormula::application(p.name.clone(), vec![Term::Variable("x".to_string())]),
            )
        })
        .collect::<Vec<_>>();

    FolFormula::conjoin(axioms)
}

/// `formula` with each nameable existential replaced by a witness constant.
pub fn witnesses(formula: &FolFormula) -> FolFormula {
    match formula {
        FolFormula::Exists { variable, term } => match witness_name(variable, term) {
            Some(name) => {
                let name = match variable.starts_with('e') {
                    true => format!("{EVENT_PREFIX}{name}"),
                    false => name,
                };
                witnesses(&term.substitute(variable, &Term::Constant(name)))
            }
            None => FolFormula::exists(variable.clone(), witnesses(term)),
        },

        FolFormula::All { variable, term } => {
            FolFormula::all(variable.clone(), witnesses(term))
        }

        FolFormula::Lambda { variable, term } => {
            FolFormula::lambda(variable.clone(), witnesses(term))
        }

        FolFormula::Negated { term } => FolFormula::negated(witnesses(term)),

        FolFormula::And { first, second } => {
            FolFormula::and(witnesses(first), witnesses(second))
        }

        FolFormula::Or { first, second } => FolFormula::or(witnesses(first), witnesses(second)),

        FolFormula::Imp { first, second } => {
            FolFormula::imp(witnesses(first), witnesses(second))
        }

        FolFormula::Application { .. } | FolFormula::Equality { .. } => formula.clone(),
    }
}

/// The witness name for `variable` in `body`: the hyphen-joined lowercase
/// names of the unary predicates applied to the variable, in occurrence order.
fn witness_name(variable: &str, body: &FolFormula) -> Option<String> {
    let mut names: Vec<String> = Vec::default();
    collect_applying(variable, body, &mut names);

    match names.is_empty() {
        true => None,
        false => Some(names.join("-")),
    }
}

fn collect_applying(variable: &str, body: &FolFormula, names: &mut Vec<String>) {
    match body {
        FolFormula::Exists { variable: v, term }
        | FolFormula::All { variable: v, term }
        | FolFormula::Lambda { variable: v, term } => {
            // An inner binder of the same name shields its body.
            if v != variable {
                collect_applying(variable, term, names);
            }
        }

        FolFormula::Negated { term } => collect_applying(variable, term, names),

        FolFormula::And { first, second }
        | FolFormula::Or { first, second }
        | FolFormula::Imp { first, second } => {
            collect_applying(variable, first, names);
            collect_applying(variable, second, names);
        }

        FolFormula::Application { pred, args } => {
            if let [Term::Variable(name)] = args.as_slice() {
                let lowered = pred.to_lowercase();
                if name == variable && !names.contains(&lowered) {
                    names.push(lowered);
                }
            }
        }

        FolFormula::Equality { .. } => {}
    }
}
