//! The trail of assignments.
//!
//! The trail records each atom as it is valued, in order.
//! In addition, the trail records the index at which each decision level began, such that the atoms valued at level *l* are those from the *l*th level index to the next level index (or the end of the trail).
//!
//! Atoms valued before any decision was made are at level zero, and precede the first level index.
//!
//! ```rust
//! # use tern_sat::db::trail::Trail;
//! let mut trail = Trail::default();
//! trail.store_assignment(3);
//! trail.open_level();
//! trail.store_assignment(1);
//! trail.store_assignment(2);
//!
//! assert_eq!(trail.level(), 1);
//! assert_eq!(trail.clear_assignments_above(0), vec![1, 2]);
//! assert_eq!(trail.assignments(), &[3]);
//! ```

use crate::{db::LevelIndex, structures::atom::Atom};

#[derive(Default)]
pub struct Trail {
    atoms: Vec<Atom>,
    level_indicies: Vec<usize>,
}

impl Trail {
    /// Stores an assignment to the top decision level.
    pub fn store_assignment(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    /// Begins a fresh decision level at the current end of the trail.
    pub fn open_level(&mut self) {
        self.level_indicies.push(self.atoms.len());
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// All assignments, in order of assignment.
    pub fn assignments(&self) -> &[Atom] {
        &self.atoms
    }

    /// The index of the trail at which the given level began, if the level exists.
    ///
    /// Level zero always begins at index zero.
    pub fn level_start(&self, level: LevelIndex) -> Option<usize> {
        match level {
            0 => Some(0),
            _ => self.level_indicies.get(level as usize - 1).copied(),
        }
    }

    /// Removes levels above the given level, if they exist, returning the atoms valued at those levels.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the returned atoms.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<Atom> {
        // level_indicies stores with zero-indexing.
        // So, all assignments made after level i are those at and after atoms[level_indicies[i]].
        match self.level_indicies.get(level as usize) {
            Some(&level_start) => {
                self.level_indicies.truncate(level as usize);
                self.atoms.split_off(level_start)
            }
            None => Vec::default(),
        }
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;

    #[test]
    fn level_starts() {
        let mut trail = Trail::default();
        trail.store_assignment(4);
        trail.open_level();
        trail.store_assignment(2);
        trail.open_level();
        trail.store_assignment(1);
        trail.store_assignment(3);

        assert_eq!(trail.level_start(0), Some(0));
        assert_eq!(trail.level_start(1), Some(1));
        assert_eq!(trail.level_start(2), Some(2));
        assert_eq!(trail.level_start(3), None);

        assert_eq!(trail.clear_assignments_above(1), vec![1, 3]);
        assert_eq!(trail.level(), 1);
        assert_eq!(trail.assignments(), &[4, 2]);
    }

    #[test]
    fn clear_above_current_is_noop() {
        let mut trail = Trail::default();
        trail.open_level();
        trail.store_assignment(5);

        assert!(trail.clear_assignments_above(1).is_empty());
        assert_eq!(trail.level(), 1);
    }
}
