use heron_fol::{
    config::{Config, EmptyDomainPolicy},
    context::Context,
    discourse::DiscourseModel,
    grounding::{closure::class_closure, Grounder},
    parser::{FolParser, LogicParser},
    types::err::{ErrorKind, GroundingError},
};

mod vocabulary {
    use super::*;

    #[test]
    fn stable_across_runs() {
        let formula = LogicParser
            .parse("(all x. (P(x) -> Q(x)) & (P(a) & R(b,c)))")
            .unwrap();

        let mut first = DiscourseModel::new();
        first.populate(&formula);

        let mut second = DiscourseModel::new();
        second.populate(&formula);
        second.populate(&formula);

        assert_eq!(first.vocabulary, second.vocabulary);
        assert_eq!(first.vocabulary, vec!["a", "b", "c", "P", "Q", "R"]);
    }

    #[test]
    fn grounding_leaves_the_model_unchanged() {
        let formula = LogicParser.parse("(P(a) & exists x. P(x))").unwrap();

        let mut discourse = DiscourseModel::new();
        discourse.populate(&formula);
        let vocabulary = discourse.vocabulary.clone();

        Grounder::new(&discourse, EmptyDomainPolicy::Classical)
            .ground(&formula)
            .unwrap();

        assert_eq!(discourse.vocabulary, vocabulary);
    }

    #[test]
    fn grounded_strings_decode_to_readable_atoms() {
        let formula = LogicParser.parse("(P(a) -> Q(a))").unwrap();

        let mut discourse = DiscourseModel::new();
        discourse.populate(&formula);

        let grounded = Grounder::new(&discourse, EmptyDomainPolicy::Classical)
            .ground(&formula)
            .unwrap();

        assert_eq!(discourse.readable(&grounded).unwrap(), "(P(a) implies Q(a))");
    }
}

mod closure_interaction {
    use super::*;

    #[test]
    fn witnesses_enter_the_discourse_on_population() {
        let premise = LogicParser.parse("exists x. P(x)").unwrap();
        let closed = class_closure(&premise);

        let mut discourse = DiscourseModel::new();
        discourse.populate(&closed);

        // The witness constant p now inhabits the class P quantifies over.
        assert!(discourse.index_of("p").is_some());

        let grounded = Grounder::new(&discourse, EmptyDomainPolicy::Classical)
            .ground(&closed)
            .unwrap();
        assert!(discourse.readable(&grounded).unwrap().contains("P(p)"));
    }
}

mod policies {
    use super::*;

    fn config(policy: EmptyDomainPolicy) -> Config {
        Config {
            class_closure: false,
            empty_domain: policy,
            ..Config::default()
        }
    }

    #[test]
    fn classical_empty_domains_decide_quantifiers() {
        let mut ctx = Context::from_config(config(EmptyDomainPolicy::Classical));

        // With no constants in sight, a universal holds vacuously and an
        // existential is unsatisfiable.
        assert!(ctx.check_implication(&[], "all x. P(x)").unwrap().holds());
        assert!(!ctx.check_implication(&[], "exists x. P(x)").unwrap().holds());
    }

    #[test]
    fn strict_empty_domains_error() {
        let mut ctx = Context::from_config(config(EmptyDomainPolicy::Error));

        assert_eq!(
            ctx.check_implication(&[], "all x. P(x)"),
            Err(ErrorKind::Grounding(GroundingError::EmptyDomain)),
        );
    }

    #[test]
    fn closure_inhabits_otherwise_empty_classes() {
        // The same existential, closed: the witness makes it checkable.
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx
            .check_implication(&["exists x. P(x)"], "exists x. P(x)")
            .unwrap()
            .holds());
    }
}

mod cancellation {
    use super::*;

    #[test]
    fn a_terminate_callback_stops_the_check() {
        let mut ctx = Context::from_config(Config::default());
        ctx.set_callback_terminate(Box::new(|| true));

        assert_eq!(
            ctx.check_implication(&["P(a)"], "P(a)"),
            Err(ErrorKind::Terminated),
        );
    }
}
