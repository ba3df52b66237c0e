mod decision_levels {
    use tern_sat::{
        config::Config,
        context::Context,
        procedures::decision::DecisionOk,
        structures::{consequence::AssignmentSource, literal::Literal},
    };

    #[test]
    fn decisions_open_levels() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s] = *ctx.fresh_literals(4).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        let _ = ctx.add_clause(vec![-p, q]);
        let _ = ctx.add_clause(vec![-r, -s]);

        assert_eq!(ctx.make_decision(), Ok(DecisionOk::Literal(p)));
        assert_eq!(ctx.unit_propagation(), Ok(true));

        assert_eq!(ctx.level(), 1);
        assert_eq!(ctx.atom_db.level_of(q.atom()), Some(1));
        assert_eq!(
            ctx.atom_db.source_of(q.atom()),
            Some(&AssignmentSource::Propagation(vec![p.atom()]))
        );

        assert_eq!(ctx.make_decision(), Ok(DecisionOk::Literal(r)));
        assert_eq!(ctx.unit_propagation(), Ok(true));

        assert_eq!(ctx.level(), 2);
        assert_eq!(ctx.atom_db.value_of(s.atom()), Some(false));
        assert_eq!(ctx.atom_db.level_of(s.atom()), Some(2));
        assert_eq!(ctx.trail.assignments(), &[1, 2, 3, 4]);
        assert_eq!(ctx.trail.level_start(2), Some(2));

        assert_eq!(ctx.make_decision(), Ok(DecisionOk::Exhausted));
    }

    #[test]
    fn unit_sources() {
        let mut ctx = Context::from_config(Config::default());

        let _ = ctx.add_clause(vec![2]);
        let _ = ctx.add_clause(vec![-2, 1]);

        assert_eq!(ctx.unit_propagation(), Ok(true));
        assert_eq!(ctx.unit_propagation(), Ok(true));
        assert_eq!(ctx.unit_propagation(), Ok(false));

        assert_eq!(ctx.atom_db.source_of(2), Some(&AssignmentSource::Unit));
        assert_eq!(
            ctx.atom_db.source_of(1),
            Some(&AssignmentSource::Propagation(vec![2]))
        );
        assert_eq!(ctx.atom_db.level_of(1), Some(0));
    }

    #[test]
    fn proven_backjump() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s] = *ctx.fresh_literals(4).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        let _ = ctx.add_clause(vec![-p, q]);
        let _ = ctx.add_clause(vec![p]);
        let _ = ctx.add_clause(vec![-r, -s]);

        while let Ok(true) = ctx.unit_propagation() {}

        assert_eq!(ctx.make_decision(), Ok(DecisionOk::Literal(r)));
        while let Ok(true) = ctx.unit_propagation() {}

        assert_eq!(ctx.atom_db.value_of(q.atom()), Some(true));
        assert_eq!(ctx.atom_db.value_of(s.atom()), Some(false));

        ctx.backjump(0);

        assert_eq!(ctx.level(), 0);
        assert_eq!(ctx.atom_db.value_of(q.atom()), Some(true));
        assert!(ctx.atom_db.is_assigned(p.atom()));
        assert!(!ctx.atom_db.is_assigned(r.atom()));
        assert!(ctx.atom_db.value_of(s.atom()).is_none());
    }

    #[test]
    fn backjump_restores() {
        let mut ctx = Context::from_config(Config::default());

        let _ = ctx.add_clause(vec![-1, 2]);
        let _ = ctx.add_clause(vec![-3, 4]);
        let _ = ctx.add_clause(vec![-5, 6]);

        let mut snapshots = Vec::default();
        for _ in 0..3 {
            snapshots.push((ctx.atom_db.valuation(), ctx.trail.assignments().to_vec()));
            assert!(ctx.make_decision().is_ok());
            while let Ok(true) = ctx.unit_propagation() {}
        }

        assert_eq!(ctx.level(), 3);
        assert!(ctx.atom_db.is_full());

        for level in (0..3).rev() {
            ctx.backjump(level);

            let (valuation, trail) = &snapshots[level as usize];
            assert_eq!(&ctx.atom_db.valuation(), valuation);
            assert_eq!(ctx.trail.assignments(), trail.as_slice());
            assert_eq!(ctx.level(), level);
        }
    }

    #[test]
    fn backjump_above_is_noop() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.add_clause(vec![1, 2]);

        assert!(ctx.make_decision().is_ok());
        ctx.backjump(4);

        assert_eq!(ctx.level(), 1);
        assert_eq!(ctx.value_of(1), Some(true));
    }

    #[test]
    fn clear_decisions() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.add_clause(vec![1]);
        let _ = ctx.add_clause(vec![2, 3]);

        assert!(ctx.solve().is_ok());
        assert!(ctx.level() > 0);

        ctx.clear_decisions();

        assert_eq!(ctx.level(), 0);
        assert_eq!(ctx.value_of(1), Some(true));
        assert_eq!(ctx.atom_db.valued_count(), 1);
    }
}
