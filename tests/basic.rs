use heron_fol::{config::Config, context::Context, reports::Report};

mod entailments {
    use super::*;

    fn ctx() -> Context {
        Context::from_config(Config::default())
    }

    #[test]
    fn a_sentence_entails_itself() {
        let report = ctx().check_implication(&["P(a)"], "P(a)").unwrap();
        assert_eq!(report, Report::Entailed);
    }

    #[test]
    fn modus_ponens() {
        let report = ctx()
            .check_implication(&["all x. (P(x) -> Q(x))", "P(a)"], "Q(a)")
            .unwrap();
        assert!(report.holds());
    }

    #[test]
    fn a_conditional_alone_does_not_ground_its_consequent() {
        let report = ctx()
            .check_implication(&["all x. (P(x) -> Q(x))"], "Q(a)")
            .unwrap();

        assert!(!report.holds());

        // Every countermodel leaves a outside both classes.
        let model = report.countermodel().unwrap();
        assert_eq!(model.value_of("P", &["a"]), Some(false));
        assert_eq!(model.value_of("Q", &["a"]), Some(false));
    }

    #[test]
    fn an_existential_witness_is_not_a_named_constant() {
        let report = ctx().check_implication(&["exists x. P(x)"], "P(a)").unwrap();

        assert!(!report.holds());

        // Class closure names the witness after the predicate, not after a.
        let model = report.countermodel().unwrap();
        assert_eq!(model.value_of("P", &["p"]), Some(true));
        assert_eq!(model.value_of("P", &["a"]), Some(false));
    }

    #[test]
    fn conditionals_chain() {
        let report = ctx()
            .check_implication(
                &["all x. (P(x) -> Q(x))", "all x. (Q(x) -> R(x))"],
                "all x. (P(x) -> R(x))",
            )
            .unwrap();
        assert!(report.holds());
    }

    #[test]
    fn ex_falso_quodlibet() {
        let report = ctx().check_implication(&["(P(a) & -P(a))"], "Q(b)").unwrap();
        assert!(report.holds());
    }
}

mod empty_premises {
    use super::*;

    #[test]
    fn a_tautology_is_valid() {
        let report = Context::from_config(Config::default())
            .check_implication(&[], "(P(a) | -P(a))")
            .unwrap();
        assert!(report.holds());
    }

    #[test]
    fn a_contingency_is_not() {
        let report = Context::from_config(Config::default())
            .check_implication(&[], "P(a)")
            .unwrap();
        assert!(!report.holds());
    }
}

mod equality {
    use super::*;

    #[test]
    fn equality_entails_itself() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.implies("a = b", "a = b").unwrap());
    }

    #[test]
    fn equality_is_syntactic_only() {
        // No closure under symmetry: a = b and b = a are distinct atoms.
        let mut ctx = Context::from_config(Config::default());
        assert!(!ctx.implies("a = b", "b = a").unwrap());
    }
}

mod derived_checks {
    use super::*;

    fn ctx() -> Context {
        Context::from_config(Config::default())
    }

    #[test]
    fn implication_is_check_with_one_premise() {
        assert!(ctx().implies("(P(a) & Q(a))", "P(a)").unwrap());
        assert!(!ctx().implies("P(a)", "(P(a) & Q(a))").unwrap());
    }

    #[test]
    fn equivalence_goes_both_ways() {
        let mut ctx = ctx();

        assert!(ctx.equivalent("(P(a) & Q(a))", "(Q(a) & P(a))").unwrap());
        assert!(ctx
            .equivalent("all x. (P(x) -> Q(x))", "all x. (-Q(x) -> -P(x))")
            .unwrap());
        assert!(!ctx.equivalent("(P(a) & Q(a))", "(P(a) | Q(a))").unwrap());
    }

    #[test]
    fn material_negation() {
        let mut ctx = ctx();

        assert!(ctx.negation_of("P(a)", "-P(a)").unwrap());
        assert!(!ctx.negation_of("P(a)", "Q(a)").unwrap());
    }

    #[test]
    fn events_and_individuals_check_together() {
        let mut ctx = ctx();

        let report = ctx
            .check_implication(
                &["all e. (Run(e) -> Move(e))", "Run(Ev_sprint)"],
                "Move(Ev_sprint)",
            )
            .unwrap();
        assert!(report.holds());
    }
}

mod errors {
    use super::*;
    use heron_fol::types::err::{ErrorKind, ParseError};

    #[test]
    fn malformed_sentences_surface_as_parse_errors() {
        let mut ctx = Context::from_config(Config::default());

        let outcome = ctx.check_implication(&["P(a"], "P(a)");
        assert!(matches!(outcome, Err(ErrorKind::Parse(_))));

        assert_eq!(
            ctx.check_implication(&[""], "P(a)"),
            Err(ErrorKind::Parse(ParseError::Empty)),
        );
    }

    #[test]
    fn the_context_is_reusable_after_an_error() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.check_implication(&["P(a"], "P(a)").is_err());
        assert!(ctx.check_implication(&["P(a)"], "P(a)").unwrap().holds());
    }
}
