use tern_sat::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod basic {

    use tern_sat::{
        structures::{
            clause::{CClause, Clause},
            literal::Literal,
        },
        types::err::{ClauseDBError, ErrorKind},
    };

    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_literal().unwrap();

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p]));

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![p]));
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable));
        assert!(ctx.unsatisfiable_clause().is_ok());
    }

    #[test]
    fn complementary_units() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_literal().unwrap();

        assert!(ctx.add_clause(vec![p]).is_ok());
        assert!(ctx.add_clause(vec![-p]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.total_decisions, 0);
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p, q]));
        assert!(ctx.add_clause(vec![-p]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn either_but_not_both() {
        let mut ctx = Context::from_config(Config::default());

        let clause_a = vec![1, 2];
        let clause_b = vec![-1, -2];
        assert!(ctx.add_clause(clause_a.clone()).is_ok());
        assert!(ctx.add_clause(clause_b.clone()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let valuation = ctx.atom_db.valuation();
        assert!(clause_a.satisfied_on(&valuation));
        assert!(clause_b.satisfied_on(&valuation));
    }

    #[test]
    fn no_clauses() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.fresh_literals(3).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn duplicates() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, p, q, q]).is_ok());

        assert_eq!(2, ctx.atom_db.count());

        let database = ctx.clause_db.all_clauses().collect::<Vec<_>>();
        assert_eq!(database[0].as_dimacs(true), "1 2 0");
    }

    #[test]
    fn tautology_skip() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(ctx.add_clause(vec![p, -q, -p]), Ok(ClauseOk::Tautology));
        assert!(ctx.clause_db.all_clauses().next().is_none());
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.add_clause(CClause::default()),
            Err(ErrorKind::ClauseDB(ClauseDBError::EmptyClause))
        );
    }

    #[test]
    fn atoms_extend() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![-7]).is_ok());
        assert_eq!(ctx.atom_db.count(), 7);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![1, 2, 3, 4, 5, 6, -7]));
    }
}

mod incremental {
    use tern_sat::types::err::{ClauseDBError, ErrorKind};

    use super::*;

    #[test]
    fn clause_after_decision() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(
            ctx.add_clause(vec![-1]),
            Err(ErrorKind::ClauseDB(ClauseDBError::DecisionMade))
        );

        ctx.clear_decisions();
        assert_eq!(ctx.add_clause(vec![-1]), Ok(ClauseOk::Added));

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![-1, 2]));
    }

    #[test]
    fn unsatisfiable_is_kept() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![1]).is_ok());
        assert!(ctx.add_clause(vec![-1]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

        ctx.clear_decisions();
        assert!(ctx.add_clause(vec![2]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn all_models() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.add_clause(vec![1, 2, 3]).is_ok());

        let mut count = 0;
        while ctx.solve() == Ok(Report::Satisfiable) {
            count += 1;

            let block = ctx
                .model()
                .unwrap()
                .iter()
                .map(|literal| -literal)
                .collect::<Vec<_>>();

            ctx.clear_decisions();
            assert!(ctx.add_clause(block).is_ok());
        }

        assert_eq!(count, 7);
    }

    #[test]
    fn tautology_on_fresh_atom() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![1]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.level(), 0);

        assert_eq!(ctx.add_clause(vec![2, -2]), Ok(ClauseOk::Tautology));
        assert_eq!(ctx.atom_db.count(), 2);
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.model(), None);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.model(), Some(vec![1, 2]));
    }

    #[test]
    fn fresh_atom_after_solve() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![-1]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.fresh_atom(), Ok(2));
        assert_eq!(ctx.report(), Report::Unknown);

        assert!(ctx.ensure_atom(2).is_ok());
        assert_eq!(ctx.report(), Report::Unknown);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.ensure_atom(2).is_ok());
        assert_eq!(ctx.report(), Report::Satisfiable);
        assert_eq!(ctx.model(), Some(vec![-1, 2]));

        assert!(ctx.ensure_atom(3).is_ok());
        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.model(), None);
    }
}

mod limits {
    use super::*;

    /// The pigeonhole formula for `holes + 1` pigeons and `holes` holes.
    fn pigeonhole(ctx: &mut Context, holes: i32) {
        let pigeons = holes + 1;
        let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;

        for pigeon in 0..pigeons {
            let clause = (0..holes).map(|hole| atom(pigeon, hole)).collect::<Vec<_>>();
            assert!(ctx.add_clause(clause).is_ok());
        }

        for hole in 0..holes {
            for pigeon in 0..pigeons {
                for other in (pigeon + 1)..pigeons {
                    assert!(ctx.add_clause(vec![-atom(pigeon, hole), -atom(other, hole)]).is_ok());
                }
            }
        }
    }

    #[test]
    fn pigeonhole_unsatisfiable() {
        let mut ctx = Context::from_config(Config::default());
        pigeonhole(&mut ctx, 3);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn conflict_limit() {
        let mut config = Config::default();
        assert!(config.conflict_limit.set(1).is_ok());

        let mut ctx = Context::from_config(config);
        pigeonhole(&mut ctx, 4);

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(ctx.counters.total_conflicts, 1);

        // The solve may be continued with a fresh allowance of conflicts.
        ctx.config.conflict_limit.value = 0;
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }
}
