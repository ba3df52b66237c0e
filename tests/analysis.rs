use tern_sat::{config::Config, context::Context};

mod analysis {
    use tern_sat::{
        procedures::solve::StepOk,
        structures::clause::{Clause, ClauseStatus},
        types::err::{AnalysisError, ErrorKind},
    };

    use super::*;

    /// Makes `count` decisions, propagating after each decision.
    fn decide_and_propagate(ctx: &mut Context, count: usize) {
        for _ in 0..count {
            assert!(ctx.make_decision().is_ok());
            while let Ok(true) = ctx.unit_propagation() {}
        }
    }

    #[test]
    fn learnt_from_decisions() {
        let mut ctx = Context::from_config(Config::default());

        // Atom 2 is irrelevant to the conflict, which follows from decisions on 1 and 3.
        let _ = ctx.add_clause(vec![-1, -3, 4]);
        let _ = ctx.add_clause(vec![-4, 5]);
        let _ = ctx.add_clause(vec![-4, -5]);

        decide_and_propagate(&mut ctx, 2);
        assert_eq!(ctx.level(), 2);
        assert!(ctx.check_conflict().is_none());

        assert!(ctx.make_decision().is_ok());
        assert_eq!(ctx.unit_propagation(), Ok(true));
        assert_eq!(ctx.unit_propagation(), Ok(true));

        let key = ctx.check_conflict().unwrap();
        let result = ctx.conflict_analysis(&key).unwrap();

        assert_eq!(result.clause, vec![-1, -3]);
        assert_eq!(result.backjump_level, 1);
    }

    #[test]
    fn unit_atoms_are_dropped() {
        let mut ctx = Context::from_config(Config::default());

        let _ = ctx.add_clause(vec![1]);
        let _ = ctx.add_clause(vec![-1, -2, 3]);
        let _ = ctx.add_clause(vec![-3, -2]);

        while let Ok(true) = ctx.unit_propagation() {}
        decide_and_propagate(&mut ctx, 1);

        let key = ctx.check_conflict().unwrap();
        let result = ctx.conflict_analysis(&key).unwrap();

        assert_eq!(result.clause, vec![-2]);
        assert_eq!(result.backjump_level, 0);
    }

    #[test]
    fn no_conflict() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.add_clause(vec![1, 2]);

        let key = ctx.clause_db.all_clauses().next().unwrap().key();

        assert_eq!(
            ctx.learn_clause(&key),
            Err(ErrorKind::Analysis(AnalysisError::NoConflict))
        );
    }

    #[test]
    fn second_highest_level() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.fresh_literals(4).is_ok());

        decide_and_propagate(&mut ctx, 4);

        assert_eq!(ctx.non_chronological_backjump_level(&vec![-1, -3, -4]), Ok(3));
        assert_eq!(ctx.non_chronological_backjump_level(&vec![-2, -4]), Ok(2));
        assert_eq!(ctx.non_chronological_backjump_level(&vec![-4]), Ok(0));
    }

    #[test]
    fn learnt_clauses_assert() {
        let mut ctx = Context::from_config(Config::default());

        // Every assignment of three atoms falsifies some clause.
        for clause in [
            vec![1, 2, 3],
            vec![1, 2, -3],
            vec![1, -2, 3],
            vec![1, -2, -3],
            vec![-1, 2, 3],
            vec![-1, 2, -3],
            vec![-1, -2, 3],
            vec![-1, -2, -3],
        ] {
            assert!(ctx.add_clause(clause).is_ok());
        }

        loop {
            match ctx.step() {
                Ok(StepOk::Learnt(key)) => {
                    let clause = ctx.clause_db.get(&key).unwrap();
                    assert!(matches!(
                        clause.status_on(&ctx.atom_db.valuation()),
                        ClauseStatus::Asserting(_)
                    ));
                }

                Ok(StepOk::Unsatisfiable) => break,

                Ok(StepOk::Satisfiable) => panic!("Satisfiable"),

                Ok(_) => {}

                Err(e) => panic!("{e:?}"),
            }
        }

        assert!(ctx.clause_db.learnt_count() > 0);
    }
}
