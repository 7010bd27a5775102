use crate::{
    backend::{SatSolver, Verdict},
    config::Config,
    dimacs::NumericMap,
    discourse::DiscourseModel,
    grounding::{closure::class_closure, Grounder},
    misc::log::targets,
    parser::FolParser,
    reports::{GroundLiteral, Model, Report},
    structures::formula::FolFormula,
    tseitin::TseitinTransform,
    types::err::ErrorKind,
};

use super::negate;

/// A generic context, parameterised to a SAT backend.
///
/// The parser is injected rather than global, so a context may be driven by
/// any front end producing the
/// [FolFormula](crate::structures::formula::FolFormula) AST.
pub struct GenericContext<S: SatSolver> {
    /// The configuration of the context.
    pub config: Config,

    /// The parser of surface sentences.
    pub parser: Box<dyn FolParser>,

    /// The SAT backend.
    pub solver: S,

    /// A callback checked between pipeline stages; returning true stops the
    /// check with [ErrorKind::Terminated].
    /// Once the backend is invoked, cancellation waits on the backend.
    pub callback_terminate: Option<Box<dyn FnMut() -> bool>>,
}

impl<S: SatSolver> GenericContext<S> {
    /// A context over the given configuration, parser, and backend.
    pub fn new(config: Config, parser: Box<dyn FolParser>, solver: S) -> Self {
        GenericContext {
            config,
            parser,
            solver,
            callback_terminate: None,
        }
    }

    /// Sets the termination callback.
    pub fn set_callback_terminate(&mut self, callback: Box<dyn FnMut() -> bool>) {
        self.callback_terminate = Some(callback);
    }

    fn terminate_requested(&mut self) -> bool {
        match &mut self.callback_terminate {
            Some(callback) => callback(),
            None => false,
        }
    }

    /// Whether the conjunction of `premises` entails `conclusion`.
    ///
    /// The check builds `¬(Ψ > C)` --- with Ψ the premises conjoined, each
    /// augmented by [class closure](crate::grounding::closure) when configured
    /// --- grounds it over its own discourse, and asks the backend.
    /// Unsatisfiability is entailment; otherwise the report carries the
    /// decoded countermodel.
    ///
    /// With no premises the check is of `¬C` alone, so the report is whether
    /// `C` is valid over its discourse.
    pub fn check_implication(
        &mut self,
        premises: &[&str],
        conclusion: &str,
    ) -> Result<Report, ErrorKind> {
        let conclusion = self.parser.parse(conclusion)?;

        let formula = match premises {
            [] => FolFormula::negated(conclusion),
            _ => {
                let mut antecedents = Vec::with_capacity(premises.len());
                for premise in premises {
                    let parsed = self.parser.parse(premise)?;
                    match self.config.class_closure {
                        true => antecedents.push(class_closure(&parsed)),
                        false => antecedents.push(parsed),
                    }
                }

                let antecedent =
                    FolFormula::conjoin(antecedents).expect("premises are non-empty");
                FolFormula::negated(FolFormula::imp(antecedent, conclusion))
            }
        };

        self.check_formula(&formula)
    }

    /// Whether `formula` is unsatisfiable over its own discourse: grounds,
    /// translates to CNF, maps to integers, and dispatches to the backend.
    pub fn check_formula(&mut self, formula: &FolFormula) -> Result<Report, ErrorKind> {
        log::info!(target: targets::CHECK, "Checking {formula}");

        let mut discourse = DiscourseModel::with_base(self.config.code_base);
        discourse.populate(formula);

        if self.terminate_requested() {
            return Err(ErrorKind::Terminated);
        }

        let grounder = Grounder::new(&discourse, self.config.empty_domain);
        let grounded = grounder.ground(formula)?;

        if self.terminate_requested() {
            return Err(ErrorKind::Terminated);
        }

        let mut tseitin = TseitinTransform::new();
        let clauses = tseitin.transform(&grounded)?;
        let numeric_map = NumericMap::new(&clauses);
        let numeric = numeric_map.numeric(&clauses);

        if self.terminate_requested() {
            return Err(ErrorKind::Terminated);
        }

        match self.solver.solve(&numeric)? {
            Verdict::Unsatisfiable => {
                log::info!(target: targets::CHECK, "Unsatisfiable: the entailment holds");
                Ok(Report::Entailed)
            }

            Verdict::Satisfiable(assignment) => {
                log::info!(target: targets::CHECK, "Satisfiable: decoding a countermodel");

                let mut literals = Vec::default();
                for number in assignment {
                    let Some(literal) = numeric_map.to_literal(number) else {
                        continue;
                    };
                    if tseitin.is_auxiliary(literal.atom()) {
                        continue;
                    }

                    literals.push(GroundLiteral {
                        polarity: literal.polarity(),
                        atom: discourse.decode_atom(literal.atom())?,
                    });
                }

                Ok(Report::NotEntailed(Model { literals }))
            }
        }
    }

    /// Whether `first` entails `second`.
    pub fn implies(&mut self, first: &str, second: &str) -> Result<bool, ErrorKind> {
        Ok(self.check_implication(&[first], second)?.holds())
    }

    /// Whether `first` and `second` entail each other.
    pub fn equivalent(&mut self, first: &str, second: &str) -> Result<bool, ErrorKind> {
        Ok(self.implies(first, second)? && self.implies(second, first)?)
    }

    /// Whether each sentence is materially the negation of the other:
    /// `first` entails `¬second`, and `¬first` entails `second`.
    pub fn negation_of(&mut self, first: &str, second: &str) -> Result<bool, ErrorKind> {
        Ok(self.implies(first, &negate(second))?
            && self.implies(&negate(first), second)?)
    }
}
