use rand::SeedableRng;

use tern_sat::{config::Config, context::Context, procedures::solve::StepOk};
use tern_tests::{
    minimal_pcg::MinimalPCG32,
    random::{random_formula, Schedule},
};

/// Checks the trail of the context against the levels and sources of the atom database.
///
/// - The level of each atom on the trail is the level whose markers surround the position of the atom.
/// - Each antecedent of a propagated atom is on the trail before the atom.
fn check_trail(ctx: &Context) {
    let trail = ctx.trail.assignments();

    let mut position = vec![None; ctx.atom_db.count() + 1];
    for (index, atom) in trail.iter().enumerate() {
        assert!(position[*atom as usize].is_none(), "{atom} is on the trail twice");
        position[*atom as usize] = Some(index);
    }

    assert_eq!(trail.len(), ctx.atom_db.valued_count());

    for (index, atom) in trail.iter().enumerate() {
        let expected_level = (1..=ctx.level())
            .filter(|level| ctx.trail.level_start(*level).is_some_and(|start| start <= index))
            .count() as u32;
        assert_eq!(ctx.atom_db.level_of(*atom), Some(expected_level), "level of {atom}");

        let source = ctx.atom_db.source_of(*atom).unwrap();
        for antecedent in source.antecedents() {
            match position[*antecedent as usize] {
                Some(antecedent_index) => assert!(antecedent_index < index, "{antecedent} after {atom}"),
                None => panic!("{antecedent} of {atom} is not on the trail"),
            }
        }
    }
}

mod invariants {
    use super::*;

    #[test]
    fn after_each_step() {
        let mut rng = MinimalPCG32::from_seed(21u64.to_le_bytes());

        for trial in Schedule::new(1, 25, 100) {
            let formula = random_formula(&mut rng, trial.atoms, trial.clauses);

            let mut ctx = Context::from_config(Config::default());
            assert!(ctx.fresh_literals(formula.atoms).is_ok());
            for clause in &formula.clauses {
                assert!(ctx.add_clause(clause.clone()).is_ok());
            }

            loop {
                let step = ctx.step().unwrap();
                check_trail(&ctx);

                if matches!(step, StepOk::Satisfiable | StepOk::Unsatisfiable) {
                    break;
                }
            }
        }
    }

    #[test]
    fn decisions_begin_levels() {
        let mut rng = MinimalPCG32::from_seed(22u64.to_le_bytes());
        let formula = random_formula(&mut rng, 30, 60);

        let mut ctx = Context::from_config(Config::default());
        for clause in &formula.clauses {
            assert!(ctx.add_clause(clause.clone()).is_ok());
        }

        loop {
            match ctx.step().unwrap() {
                StepOk::Decided(_) => {
                    let start = ctx.trail.level_start(ctx.level()).unwrap();
                    let decision = ctx.trail.assignments()[start];
                    assert!(ctx.atom_db.source_of(decision).unwrap().is_decision());
                    assert_eq!(start + 1, ctx.trail.assignments().len());
                }

                StepOk::Satisfiable | StepOk::Unsatisfiable => break,

                _ => {}
            }
            check_trail(&ctx);
        }
    }
}
