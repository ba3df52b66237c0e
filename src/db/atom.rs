/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Each atom has a cell in the database, indexed by the atom.
A cell is either empty, if the atom has no value, or holds an [Assignment] of:
- The value of the atom.
- The decision level at which the atom was valued.
- The [source](AssignmentSource) of the value: a decision, a unit clause, or propagation through some clause.

Clearing the value of an atom empties the cell, so no information about a previous value is kept.

```rust
# use tern_sat::db::atom::AtomDB;
# use tern_sat::structures::consequence::AssignmentSource;
let mut atom_db = AtomDB::default();
let p = atom_db.fresh_atom().unwrap();
let q = atom_db.fresh_atom().unwrap();

assert!(atom_db.set_value(p, true, 1, AssignmentSource::Decision).is_ok());
assert!(atom_db.set_value(q, false, 1, AssignmentSource::Propagation(vec![p])).is_ok());
assert!(atom_db.set_value(q, true, 1, AssignmentSource::Decision).is_err());

assert_eq!(atom_db.value_of(q), Some(false));
assert_eq!(atom_db.level_of(q), Some(1));
assert_eq!(atom_db.valued_count(), 2);

atom_db.drop_value(q);
assert_eq!(atom_db.value_of(q), None);
```
*/

use crate::{
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::ClauseStatus,
        consequence::{Assignment, AssignmentSource},
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
    types::err::{self},
};

/// The atom database.
pub struct AtomDB {
    /// A cell for each atom, with the zero index unused.
    cells: Vec<Option<Assignment>>,

    /// A count of cells holding an assignment.
    valued: usize,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            cells: vec![None],
            valued: 0,
        }
    }
}

impl AtomDB {
    /// A fresh atom, without a value.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let atom = self.cells.len() as Atom;
        if atom > ATOM_MAX {
            return Err(err::AtomDBError::AtomsExhausted);
        }
        self.cells.push(None);
        Ok(atom)
    }

    /// Ensures each atom up to and including `atom` is part of the database.
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), err::AtomDBError> {
        if atom > ATOM_MAX {
            return Err(err::AtomDBError::AtomsExhausted);
        }

        let required = (atom as usize + 1).saturating_sub(self.cells.len());
        if self.cells.try_reserve_exact(required).is_err() {
            log::error!(target: targets::VALUATION, "Failed to allocate space for {atom} atoms");
            return Err(err::AtomDBError::AtomsExhausted);
        }

        while self.count() < atom as usize {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.cells.len() - 1
    }

    /// A count of atoms with some value.
    pub fn valued_count(&self) -> usize {
        self.valued
    }

    /// True if every atom has some value.
    pub fn is_full(&self) -> bool {
        self.valued == self.count()
    }

    /// An iterator over all atoms, in order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> {
        1..=(self.count() as Atom)
    }

    /// The assignment of the atom, if the atom has some value.
    pub fn assignment_of(&self, atom: Atom) -> Option<&Assignment> {
        self.cells.get(atom as usize).and_then(|cell| cell.as_ref())
    }

    /// The value of the atom, if the atom has some value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.assignment_of(atom).map(|assignment| assignment.value)
    }

    /// Whether the atom has some value.
    pub fn is_assigned(&self, atom: Atom) -> bool {
        self.assignment_of(atom).is_some()
    }

    /// The decision level at which the atom was valued, if the atom has some value.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.assignment_of(atom).map(|assignment| assignment.level)
    }

    /// The source of the value of the atom, if the atom has some value.
    pub fn source_of(&self, atom: Atom) -> Option<&AssignmentSource> {
        self.assignment_of(atom).map(|assignment| &assignment.source)
    }

    /// The value of the literal, if the atom of the literal has some value.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| literal.is_satisfied_by(value))
    }

    /// The status of a clause on the current valuation.
    pub fn status_of(&self, clause: &[CLiteral]) -> ClauseStatus {
        let mut unvalued = None;
        let mut unvalued_count = 0;

        for literal in clause {
            match self.value_of_literal(*literal) {
                Some(true) => return ClauseStatus::Satisfied,
                Some(false) => {}
                None => {
                    unvalued_count += 1;
                    unvalued = Some(*literal);
                }
            }
        }

        match (unvalued_count, unvalued) {
            (0, _) => ClauseStatus::Unsatisfiable,
            (1, Some(literal)) => ClauseStatus::Asserting(literal),
            _ => ClauseStatus::Open,
        }
    }

    /// Sets the value of an atom without a value.
    ///
    /// Fails if the atom is not part of the database, or already has some value.
    pub fn set_value(
        &mut self,
        atom: Atom,
        value: bool,
        level: LevelIndex,
        source: AssignmentSource,
    ) -> Result<(), err::AtomDBError> {
        let Some(cell) = self.cells.get_mut(atom as usize).filter(|_| atom != 0) else {
            log::error!(target: targets::VALUATION, "Attempt to value {atom}, outside of the atom database");
            return Err(err::AtomDBError::Unknown(atom));
        };

        if cell.is_some() {
            log::error!(target: targets::VALUATION, "Attempt to value {atom}, which already has some value");
            return Err(err::AtomDBError::Valued(atom));
        }

        *cell = Some(Assignment {
            value,
            level,
            source,
        });
        self.valued += 1;
        Ok(())
    }

    /// Clears the value of an atom.
    ///
    /// Clearing an atom without a value has no effect.
    pub fn drop_value(&mut self, atom: Atom) {
        if let Some(cell) = self.cells.get_mut(atom as usize) {
            if cell.take().is_some() {
                self.valued -= 1;
            }
        }
    }

    /// A copy of the current valuation, in canonical form.
    pub fn valuation(&self) -> CValuation {
        self.cells
            .iter()
            .map(|cell| cell.as_ref().map(|assignment| assignment.value))
            .collect()
    }
}

#[cfg(test)]
mod atom_db_tests {
    use super::*;

    #[test]
    fn ensure_extends() {
        let mut atom_db = AtomDB::default();

        assert!(atom_db.ensure_atom(5).is_ok());
        assert_eq!(atom_db.count(), 5);

        assert!(atom_db.ensure_atom(3).is_ok());
        assert_eq!(atom_db.count(), 5);
    }

    #[test]
    fn ensure_beyond_max() {
        let mut atom_db = AtomDB::default();

        assert_eq!(
            atom_db.ensure_atom(ATOM_MAX + 1),
            Err(err::AtomDBError::AtomsExhausted)
        );
        assert_eq!(atom_db.count(), 0);
    }
}
