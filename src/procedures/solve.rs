//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! A solve is a sequence of [step](Context::step)s, each of which makes a single transition of the context.
//! In priority order, a step:
//!
//! 1. Checks for a clause which is unsatisfiable on the current valuation.
//!    - If there is such a clause and no decision has been made, the formula is unsatisfiable.
//!    - Otherwise, [conflict analysis](crate::procedures::analysis) learns a clause.
//!      If the learnt clause is empty, the formula is unsatisfiable.
//!      Otherwise, the learnt clause is added to the clause database and a [backjump](crate::procedures::backjump) is made to the level at which the clause asserts some literal.
//! 2. Otherwise, applies [unit propagation](crate::procedures::bcp), if possible.
//! 3. Otherwise, if every atom has a value, the formula is satisfiable.
//! 4. Otherwise, makes a [decision](crate::procedures::decision).
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!             +---------------+
//!   +---------| make_decision |<------------------------------+
//!   |         +---------------+                               |
//!   |                                                         | if no propagation, and the valuation is partial
//!   ⌄   +----------------+  no conflict  +------------------+ |
//! --+-->| check_conflict |-------------->| unit_propagation |-+---> satisfiable, if the valuation is complete
//!   ⌃   +----------------+               +------------------+
//!   |           |                                  |
//!   |           | conflict                         | propagation
//!   |           ⌄                                  |
//!   |   +-------------------+                      |
//!   |   | conflict_analysis |----> unsatisfiable, if at level zero or the learnt clause is empty
//!   |   +-------------------+                      |
//!   |           |                                  |
//!   |           ⌄                                  |
//!   |     +----------+                             |
//!   +-----| backjump |                             |
//!   |     +----------+                             |
//!   +----------------------------------------------+
//! ```
//!
//! # Limits
//!
//! A solve may be bounded by [time](crate::config::Config::time_limit) and/or by [conflicts](crate::config::Config::conflict_limit).
//! If a bound is exceeded the solve ends with an [Unknown](Report::Unknown) report, and the context is left as it was.
//!
//! # Example
//!
//! ```rust
//! # use tern_sat::context::Context;
//! # use tern_sat::config::Config;
//! # use tern_sat::procedures::solve::StepOk;
//! # use tern_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! assert!(the_context.add_clause(vec![1, 2]).is_ok());
//! assert!(the_context.add_clause(vec![-1, 2]).is_ok());
//! assert!(the_context.add_clause(vec![1, -2]).is_ok());
//! assert!(the_context.add_clause(vec![-1, -2]).is_ok());
//!
//! assert_eq!(the_context.step(), Ok(StepOk::Decided(1)));
//! assert_eq!(the_context.step(), Ok(StepOk::Propagated));
//! assert!(matches!(the_context.step(), Ok(StepOk::Learnt(_))));
//!
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```

use std::time::Instant;

use crate::{
    context::{Context, ContextState},
    db::ClauseKey,
    misc::log::targets::{self},
    procedures::{
        analysis::AnalysisResult,
        decision::{self},
    },
    reports::Report,
    structures::{
        clause::{ClauseSource, ClauseStatus},
        literal::CLiteral,
    },
    types::err::{self},
};

/// The transition made by a step of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOk {
    /// A conflict was found, and the clause with the given key was learnt and used to backjump.
    Learnt(ClauseKey),

    /// Unit propagation assigned a value to some atom.
    Propagated,

    /// A decision was made.
    Decided(CLiteral),

    /// Every atom has a value, and no clause is unsatisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

impl Context {
    /// Makes a single transition of the context.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn step(&mut self) -> Result<StepOk, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable => return Ok(StepOk::Satisfiable),
            ContextState::Unsatisfiable(_) => return Ok(StepOk::Unsatisfiable),
            ContextState::Input => self.state = ContextState::Solving,
            ContextState::Solving => {}
        }

        self.counters.total_iterations += 1;

        if let Some(key) = self.check_conflict() {
            self.counters.total_conflicts += 1;
            log::trace!(target: targets::SOLVE, "Conflict on {key} at level {}", self.trail.level());

            if self.trail.level() == 0 {
                self.state = ContextState::Unsatisfiable(key);
                return Ok(StepOk::Unsatisfiable);
            }

            let AnalysisResult {
                clause,
                backjump_level,
            } = self.conflict_analysis(&key)?;

            if clause.is_empty() {
                self.state = ContextState::Unsatisfiable(key);
                return Ok(StepOk::Unsatisfiable);
            }

            let learnt_key = self.clause_db.store(clause, ClauseSource::Resolution)?;
            self.backjump(backjump_level);

            if self.config.assertion_check.value {
                let learnt_clause = self.clause_db.get(&learnt_key)?;
                if !matches!(
                    self.atom_db.status_of(learnt_clause),
                    ClauseStatus::Asserting(_)
                ) {
                    log::error!(target: targets::SOLVE, "{learnt_key} does not assert after backjump to {backjump_level}");
                    return Err(err::ErrorKind::from(err::AnalysisError::NoAssertion));
                }
            }

            return Ok(StepOk::Learnt(learnt_key));
        }

        if self.unit_propagation()? {
            return Ok(StepOk::Propagated);
        }

        if self.atom_db.is_full() {
            self.state = ContextState::Satisfiable;
            return Ok(StepOk::Satisfiable);
        }

        match self.make_decision()? {
            decision::DecisionOk::Literal(literal) => Ok(StepOk::Decided(literal)),

            decision::DecisionOk::Exhausted => {
                self.state = ContextState::Satisfiable;
                Ok(StepOk::Satisfiable)
            }
        }
    }

    /// Determines the satisfiability of the context, unless interrupted by some limit.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        let start_time = Instant::now();
        let start_conflicts = self.counters.total_conflicts;
        let time_bound = self.config.time_bound();
        let conflict_bound = self.config.conflict_bound();

        log::info!(target: targets::SOLVE, "Solve with {} atoms and {} clauses", self.atom_db.count(), self.clause_db.clause_count());

        'solve_loop: loop {
            match self.step()? {
                StepOk::Satisfiable | StepOk::Unsatisfiable => break 'solve_loop,

                StepOk::Learnt(_) => {
                    let conflicts = self.counters.total_conflicts - start_conflicts;
                    if conflict_bound.is_some_and(|limit| conflicts >= limit) {
                        log::info!(target: targets::SOLVE, "Conflict limit reached");
                        break 'solve_loop;
                    }
                }

                StepOk::Propagated | StepOk::Decided(_) => {}
            }

            if time_bound.is_some_and(|limit| start_time.elapsed() > limit) {
                log::info!(target: targets::SOLVE, "Time limit reached");
                break 'solve_loop;
            }
        }

        self.counters.time += start_time.elapsed();
        Ok(self.report())
    }
}
