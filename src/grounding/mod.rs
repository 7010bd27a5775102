/*!
The grounder --- quantifier elimination over a finite discourse.

Grounding is two passes over a formula:

1. [eliminate](Grounder::eliminate) replaces each quantifier by a finite fold
   over the members of the quantified kind: a left-folded disjunction for an
   existential, a conjunction for a universal.
   The kind is read off the variable name (`e…` quantifies over events), and
   members are substituted in their stored order, so the fold is deterministic.
2. [encode](Grounder::encode) maps the quantifier-free result to a
   propositional string over the model's [codec](crate::codec) alphabet, fully
   parenthesised, with the connectives of
   [proposition](crate::structures::proposition).

[ground](Grounder::ground) composes the two.

# Empty kinds

A quantifier over a kind with no members follows classical semantics under the
default [EmptyDomainPolicy::Classical]: the existential collapses to an
unsatisfiable marker, the universal to its negation.
The marker is the conjunction `(s∧-s)` over the codec's first symbol, so the
result stays within the model's alphabet.
[EmptyDomainPolicy::Error] makes the case a hard
[EmptyDomain](crate::types::err::GroundingError::EmptyDomain) instead.

# Cost

The grounded string is O(|domain|^q) for quantifier nesting depth q.
Callers must assume exponential blow-up in quantifier depth.
*/

pub mod closure;

use crate::{
    config::EmptyDomainPolicy,
    discourse::DiscourseModel,
    misc::log::targets,
    structures::{
        constant::ConstantKind,
        formula::{FolFormula, Term},
        predicate,
        proposition,
    },
    types::err::{ErrorKind, GroundingError},
};

/// A grounder for one model, holding the empty-kind policy.
pub struct Grounder<'m> {
    model: &'m DiscourseModel,
    empty_domain: EmptyDomainPolicy,
}

impl<'m> Grounder<'m> {
    /// A grounder over `model` under `empty_domain`.
    pub fn new(model: &'m DiscourseModel, empty_domain: EmptyDomainPolicy) -> Self {
        Grounder {
            model,
            empty_domain,
        }
    }

    /// The propositional string of `formula`: quantifier elimination, then encoding.
    pub fn ground(&self, formula: &FolFormula) -> Result<String, ErrorKind> {
        let eliminated = self.eliminate(formula)?;
        let encoded = self.encode(&eliminated)?;

        log::debug!(
            target: targets::GROUNDING,
            "Grounded to {} symbols over a vocabulary of {}",
            encoded.chars().count(),
            self.model.vocabulary.len()
        );

        Ok(encoded)
    }

    /// `formula` with every quantifier replaced by a finite fold over its kind.
    pub fn eliminate(&self, formula: &FolFormula) -> Result<FolFormula, GroundingError> {
        match formula {
            FolFormula::Exists { variable, term } => {
                let instances = self.instances(variable, term)?;
                match FolFormula::disjoin(instances) {
                    Some(folded) => Ok(folded),
                    None => match self.empty_domain {
                        EmptyDomainPolicy::Classical => Ok(self.falsum()?),
                        EmptyDomainPolicy::Error => Err(GroundingError::EmptyDomain),
                    },
                }
            }

            FolFormula::All { variable, term } => {
                let instances = self.instances(variable, term)?;
                match FolFormula::conjoin(instances) {
                    Some(folded) => Ok(folded),
                    None => match self.empty_domain {
                        EmptyDomainPolicy::Classical => Ok(FolFormula::negated(self.falsum()?)),
                        EmptyDomainPolicy::Error => Err(GroundingError::EmptyDomain),
                    },
                }
            }

            FolFormula::Negated { term } => Ok(FolFormula::negated(self.eliminate(term)?)),

            FolFormula::And { first, second } => Ok(FolFormula::and(
                self.eliminate(first)?,
                self.eliminate(second)?,
            )),

            FolFormula::Or { first, second } => Ok(FolFormula::or(
                self.eliminate(first)?,
                self.eliminate(second)?,
            )),

            FolFormula::Imp { first, second } => Ok(FolFormula::imp(
                self.eliminate(first)?,
                self.eliminate(second)?,
            )),

            FolFormula::Application { .. } | FolFormula::Equality { .. } => Ok(formula.clone()),

            FolFormula::Lambda { .. } => Err(GroundingError::UnknownNode),
        }
    }

    /// One eliminated instance of `term` per member of `variable`'s kind, in stored order.
    fn instances(
        &self,
        variable: &str,
        term: &FolFormula,
    ) -> Result<Vec<FolFormula>, GroundingError> {
        let kind = ConstantKind::of_variable(variable);
        let members = self.model.members(kind);

        log::trace!(
            target: targets::GROUNDING,
            "Expanding {variable} over {} member(s) of kind {kind}",
            members.len()
        );

        members
            .iter()
            .map(|member| {
                let witness = Term::Constant(member.name.clone());
                self.eliminate(&term.substitute(variable, &witness))
            })
            .collect()
    }

    /// An unsatisfiable ground marker within the model's alphabet.
    fn falsum(&self) -> Result<FolFormula, GroundingError> {
        let anchor = self
            .model
            .vocabulary
            .first()
            .ok_or(GroundingError::EmptyDomain)?;

        let atom = FolFormula::application(anchor.clone(), Vec::default());
        Ok(FolFormula::and(atom.clone(), FolFormula::negated(atom)))
    }

    /// The propositional string of a quantifier-free formula.
    pub fn encode(&self, formula: &FolFormula) -> Result<String, ErrorKind> {
        match formula {
            FolFormula::Exists { .. } | FolFormula::All { .. } => {
                Err(GroundingError::NotGrounded.into())
            }

            FolFormula::Lambda { .. } => Err(GroundingError::UnknownNode.into()),

            FolFormula::Negated { term } => {
                Ok(format!("{}{}", proposition::NEGATION, self.encode(term)?))
            }

            FolFormula::And { first, second } => Ok(format!(
                "({}{}{})",
                self.encode(first)?,
                proposition::CONJUNCTION,
                self.encode(second)?
            )),

            FolFormula::Or { first, second } => Ok(format!(
                "({}{}{})",
                self.encode(first)?,
                proposition::DISJUNCTION,
                self.encode(second)?
            )),

            FolFormula::Imp { first, second } => Ok(format!(
                "({}{}{})",
                self.encode(first)?,
                proposition::IMPLICATION,
                self.encode(second)?
            )),

            FolFormula::Application { pred, args } => {
                let names = args
                    .iter()
                    .map(|arg| match arg {
                        Term::Constant(name) => Ok(name.as_str()),
                        Term::Variable(name) => {
                            Err(GroundingError::FreeVariable(name.clone()))
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(self.model.encode_atom(pred, &names)?.to_string())
            }

            FolFormula::Equality { left, right } => {
                let mut names = Vec::with_capacity(2);
                for side in [left, right] {
                    match side {
                        Term::Constant(name) => names.push(name.as_str()),
                        Term::Variable(name) => {
                            return Err(GroundingError::FreeVariable(name.clone()).into())
                        }
                    }
                }

                Ok(self
                    .model
                    .encode_atom(predicate::EQUALITY, &names)?
                    .to_string())
            }
        }
    }
}

#[cfg(test)]
mod grounder_tests {
    use super::*;
    use crate::parser::{FolParser, LogicParser};

    fn grounded(sentence: &str, policy: EmptyDomainPolicy) -> Result<String, ErrorKind> {
        let formula = LogicParser.parse(sentence).unwrap();
        let mut discourse = DiscourseModel::new();
        discourse.populate(&formula);
        Grounder::new(&discourse, policy).ground(&formula)
    }

    #[test]
    fn existential_expands_in_insertion_order() {
        let formula = LogicParser
            .parse("((P(a) & P(b)) & exists x. P(x))")
            .unwrap();
        let mut discourse = DiscourseModel::new();
        discourse.populate(&formula);

        let p_a = discourse.encode_atom("P", &["a"]).unwrap();
        let p_b = discourse.encode_atom("P", &["b"]).unwrap();

        let grounded = Grounder::new(&discourse, EmptyDomainPolicy::Classical)
            .ground(&formula)
            .unwrap();

        assert_eq!(grounded, format!("(({p_a}∧{p_b})∧({p_a}∨{p_b}))"));
    }

    #[test]
    fn universal_folds_left() {
        let formula = LogicParser
            .parse("(((Q(a) & Q(b)) & Q(c)) & all x. Q(x))")
            .unwrap();
        let mut discourse = DiscourseModel::new();
        discourse.populate(&formula);

        let atom = |name| discourse.encode_atom("Q", &[name]).unwrap();
        let (a, b, c) = (atom("a"), atom("b"), atom("c"));

        let grounded = Grounder::new(&discourse, EmptyDomainPolicy::Classical)
            .ground(&formula)
            .unwrap();

        assert_eq!(grounded, format!("((({a}∧{b})∧{c})∧(({a}∧{b})∧{c}))"));
    }

    #[test]
    fn empty_kind_is_classical_by_default() {
        // No constants at all, so the universal quantifies over nothing.
        let grounded = grounded("all x. P(x)", EmptyDomainPolicy::Classical).unwrap();

        // The marker is built from the first vocabulary entry, here P itself.
        let formula = LogicParser.parse("all x. P(x)").unwrap();
        let mut discourse = DiscourseModel::new();
        discourse.populate(&formula);
        let anchor = discourse.codec.encode(&[0]).unwrap();

        assert_eq!(grounded, format!("-({anchor}∧-{anchor})"));
    }

    #[test]
    fn empty_kind_errors_on_request() {
        assert_eq!(
            grounded("exists x. P(x)", EmptyDomainPolicy::Error),
            Err(GroundingError::EmptyDomain.into())
        );
    }

    #[test]
    fn event_variables_range_over_events() {
        let formula = LogicParser
            .parse("(Run(Ev_run) & exists e. Run(e))")
            .unwrap();
        let mut discourse = DiscourseModel::new();
        discourse.populate(&formula);

        let run = discourse.encode_atom("Run", &["Ev_run"]).unwrap();

        let grounded = Grounder::new(&discourse, EmptyDomainPolicy::Classical)
            .ground(&formula)
            .unwrap();

        // The sole event grounds the existential to a single disjunct.
        assert_eq!(grounded, format!("({run}∧{run})"));
    }

    #[test]
    fn residual_quantifiers_are_rejected_by_encode() {
        let formula = LogicParser.parse("exists x. P(x)").unwrap();
        let mut discourse = DiscourseModel::new();
        discourse.populate(&formula);

        let encoded = Grounder::new(&discourse, EmptyDomainPolicy::Classical).encode(&formula);
        assert_eq!(encoded, Err(GroundingError::NotGrounded.into()));
    }
}
