//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//!
//! # Methods
//!
//! # [backjump](Context::backjump) --- Backjump to a target level
//!
//! Performs a backjump to some level.
//!
//! For sound application the target level must be equal to or lower than the current level.
//! Still, passing a target level greater than the current level is safe, as nothing will happen.
//!
//! # [backjump_level](Context::non_chronological_backjump_level) --- The backjump level of a(n unsatisfiable) clause
//!
//! The backjump level of a clause is the highest level for which the clause is asserting on the corresponding valuation.
//!
//! - With respect to implementation, the backjump level of a clause is the second highest decision level from the given literals, if the literals span more than one level, and 0 (zero) otherwise. \
//!   In this respect the implementation of non_chronological_backjump_level is only sound to use when applied to an clause unsatisfiable on the current valuation.
//!
//! # Example
//!
//! ```rust,ignore
//! let result = self.conflict_analysis(&key)?;
//! let key = self.clause_db.store(result.clause, ClauseSource::Resolution)?;
//! self.backjump(result.backjump_level);
//! ```
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping --- and a follow-up: [Backing Backtracking](https://www.doi.org/10.1007/978-3-030-24258-9_18).

use crate::{
    context::Context,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
    types::err,
};

impl Context {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        for atom in self.trail.clear_assignments_above(target) {
            self.atom_db.drop_value(atom);
        }
    }

    /// The non-chronological backjump level of a unsatisfiable clause.
    ///
    /// + The *non-chronological* backjump level is the previous decision level of a clause.
    /// + The *chronological* backjump level is the previous decision level of a context.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn non_chronological_backjump_level(
        &self,
        clause: &impl Clause,
    ) -> Result<LevelIndex, err::ErrorKind> {
        // Work through the clause, keeping an ordered record of the top two decision levels: (second_to_top, top)
        let mut top_two = (None, None);
        for literal in clause.literals() {
            let Some(dl) = self.atom_db.level_of(literal.atom()) else {
                log::error!(target: targets::BACKJUMP, "{literal} has no level");
                return Err(err::ErrorKind::Backjump);
            };

            match top_two {
                (_, None) => top_two.1 = Some(dl),
                (_, Some(the_top)) if dl > the_top => {
                    top_two.0 = top_two.1;
                    top_two.1 = Some(dl);
                }
                (None, _) => top_two.0 = Some(dl),
                (Some(second_to_top), _) if dl > second_to_top => top_two.0 = Some(dl),
                _ => {}
            }
        }

        match top_two {
            (None, _) => Ok(0),
            (Some(second_to_top), _) => Ok(second_to_top),
        }
    }
}
