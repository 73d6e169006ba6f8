use agm_lib::{
    config::Config,
    context::Context,
    procedures::{entailment::is_entailed, resolution::is_consistent},
    reports::{RevisionOutcome, RevisionStep, StepKind},
    structures::{
        belief::{Belief, BeliefBase},
        clause::ClauseSet,
    },
};

fn context_with(texts: &[&str]) -> Context {
    let base = texts.iter().map(|text| Belief::new(text).unwrap()).collect::<BeliefBase>();
    Context::with_base(Config::default(), base)
}

fn texts(the_context: &Context) -> Vec<&str> {
    the_context.base().texts().collect()
}

mod basic {

    use super::*;

    #[test]
    fn soundness_of_resolution() {
        assert!(!is_consistent(&ClauseSet::from_cnf("A∧¬A").unwrap()));
        assert!(is_consistent(&ClauseSet::from_cnf("A∧B").unwrap()));
    }

    #[test]
    fn entailment_via_refutation() {
        let a_implies_b = Belief::new("A→B").unwrap();
        let a = Belief::new("A").unwrap();
        assert!(is_entailed(&[a_implies_b.clauses(), a.clauses()], "B").unwrap());
        assert!(!is_entailed(&[a.clauses()], "B").unwrap());
    }

    #[test]
    fn expansion() {
        let mut the_context = context_with(&["A"]);
        let revision = the_context.revise("B").unwrap();
        assert_eq!(revision.steps, vec![RevisionStep::Added("B".to_owned())]);
        assert_eq!(revision.outcome, RevisionOutcome::Expanded);
        assert_eq!(texts(&the_context), vec!["A", "B"]);
    }

    #[test]
    fn contraction() {
        let mut the_context = context_with(&["A"]);
        let revision = the_context.revise("¬A").unwrap();
        assert_eq!(
            revision.steps,
            vec![
                RevisionStep::ConflictDetected("¬A".to_owned()),
                RevisionStep::Removed("A".to_owned()),
                RevisionStep::Added("¬A".to_owned()),
            ]
        );
        assert_eq!(texts(&the_context), vec!["¬A"]);
    }

    #[test]
    fn entrenchment_preference() {
        let mut the_context = context_with(&["A", "A∨B"]);
        let revision = the_context.revise("¬A").unwrap();
        assert_eq!(revision.outcome, RevisionOutcome::Contracted(vec!["A".to_owned()]));
        assert_eq!(texts(&the_context), vec!["A∨B", "¬A"]);
        assert!(the_context.entails("B").unwrap());
    }

    #[test]
    fn least_entrenched_of_equally_small() {
        // Removing either belief admits ¬C, and the disjunction is less entrenched.
        let mut the_context = context_with(&["A", "A→C"]);
        let revision = the_context.revise("¬C").unwrap();
        assert_eq!(
            revision.outcome,
            RevisionOutcome::Contracted(vec!["A→C".to_owned()])
        );
        assert_eq!(texts(&the_context), vec!["A", "¬C"]);

        // Of two equally entrenched beliefs, the earlier is removed.
        let mut the_context = context_with(&["A", "B"]);
        let revision = the_context.revise("¬A∨¬B").unwrap();
        assert_eq!(
            revision.outcome,
            RevisionOutcome::Contracted(vec!["A".to_owned()])
        );
        assert_eq!(texts(&the_context), vec!["B", "¬A∨¬B"]);
    }

    #[test]
    fn unresolved() {
        let mut the_context = context_with(&["A", "¬A"]);
        let revision = the_context.revise("B∧¬B").unwrap();
        assert_eq!(
            revision.kinds(),
            vec![StepKind::ConflictDetected, StepKind::Unresolved]
        );
        assert_eq!(texts(&the_context), vec!["A", "¬A"]);

        let mut the_context = context_with(&["A", "B", "C"]);
        the_context.config.contraction_limit = Some(2);
        let revision = the_context.revise("¬A∧¬B∧¬C").unwrap();
        assert_eq!(revision.outcome, RevisionOutcome::Unresolved);
        assert_eq!(texts(&the_context), vec!["A", "B", "C"]);

        the_context.config.contraction_limit = None;
        let revision = the_context.revise("¬A∧¬B∧¬C").unwrap();
        assert_eq!(revision.kinds().len(), 5);
        assert_eq!(texts(&the_context), vec!["¬A∧¬B∧¬C"]);
    }

    #[test]
    fn duplicate() {
        let mut the_context = context_with(&["A"]);
        let revision = the_context.revise("A").unwrap();
        assert_eq!(revision.steps, vec![RevisionStep::AlreadyExists("A".to_owned())]);
        assert_eq!(texts(&the_context), vec!["A"]);
    }

    #[test]
    fn already_entailed() {
        let mut the_context = context_with(&["A", "A→B"]);
        let revision = the_context.revise("A∨C").unwrap();
        assert_eq!(revision.kinds(), vec![StepKind::AlreadyEntailed]);
        assert!(!revision.changed());

        the_context.config.entailment_check = false;
        let revision = the_context.revise("A∨C").unwrap();
        assert_eq!(revision.kinds(), vec![StepKind::Added]);
    }

    #[test]
    fn revisions_keep_consistency() {
        let mut the_context = Context::from_config(Config::default());
        for text in ["A", "A→B", "B→C", "¬C", "C∨D", "¬D", "A↔¬B", "⊤", "¬A"] {
            the_context.revise(text).unwrap();
            assert!(the_context.is_consistent(), "after {text}");
        }
    }

    #[test]
    fn parse_errors_abort() {
        let mut the_context = context_with(&["A"]);
        for text in ["", "A∧", "(A", "A)", "A B", "a", "A$B"] {
            assert!(the_context.revise(text).is_err(), "{text}");
        }

        let deep = format!("{}B{}", "(".repeat(2000), ")".repeat(2000));
        assert!(the_context.revise(&deep).is_err());
        assert_eq!(texts(&the_context), vec!["A"]);
    }
}

mod steps {

    use super::*;

    #[test]
    fn serialized_trace() {
        let mut the_context = context_with(&["A"]);
        let revision = the_context.revise("¬A").unwrap();
        assert_eq!(
            serde_json::to_string(&revision.steps).unwrap(),
            r#"[{"kind":"conflict-detected","belief":"¬A"},{"kind":"removed","belief":"A"},{"kind":"added","belief":"¬A"}]"#
        );
    }

    #[test]
    fn deserialized_trace() {
        let steps: Vec<RevisionStep> =
            serde_json::from_str(r#"[{"kind":"already-entailed","belief":"A∨B"}]"#).unwrap();
        assert_eq!(steps, vec![RevisionStep::AlreadyEntailed("A∨B".to_owned())]);
        assert_eq!(steps[0].to_string(), "already-entailed: A∨B");
    }

    #[test]
    fn persisted_base() {
        let the_context = context_with(&["A → B", "¬B ∨ C"]);
        let json = serde_json::to_string(the_context.base()).unwrap();
        assert_eq!(
            json,
            r#"[{"text":"A → B","cnf":"¬A∨B"},{"text":"¬B ∨ C","cnf":"¬B∨C"}]"#
        );

        let base: BeliefBase = serde_json::from_str(&json).unwrap();
        let mut the_context = Context::with_base(Config::default(), base);
        assert!(the_context.entails("A→C").unwrap());
        assert_eq!(the_context.revise("A → B").unwrap().kinds(), vec![StepKind::AlreadyExists]);
    }
}
