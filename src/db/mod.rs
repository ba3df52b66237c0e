//! Databases for holding information relevant to a solve.
//!
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses, each indexed by a clause key. \
//!       From an external perspective there are two important kinds of clause:
//!       * Original clauses \
//!         Original clauses are added to the context from some external source (e.g. directly or through some DIMACS file). \
//!         The collection of original clauses is the CNF formula 𝐅 whose satisfiability may be determined.
//!       * Learnt clauses \
//!         Clauses added to the context by conflict analysis.
//!         Every learnt clause is a consequence of the collection of original clauses.
//!
//!   - [The atom database](crate::db::atom)
//!     + The value of each atom, together with the decision level and source of the value.
//!
//!   - [The trail](crate::db::trail)
//!     + The order in which atoms were valued, and the point at which each decision level began.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;

/// The index of a decision level.
pub type LevelIndex = u32;

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{atom::Atom, consequence::AssignmentSource},
    types::err::{self},
};

impl Context {
    /// Assigns `value` to `atom` at the current level, and records the assignment on the trail.
    ///
    /// Fails if the atom already has some value.
    pub fn assign(
        &mut self,
        atom: Atom,
        value: bool,
        source: AssignmentSource,
    ) -> Result<(), err::ErrorKind> {
        let level = self.trail.level();
        log::trace!(target: targets::VALUATION, "Assigning {atom} {value} at level {level}");

        self.atom_db.set_value(atom, value, level, source)?;
        self.trail.store_assignment(atom);
        Ok(())
    }
}
