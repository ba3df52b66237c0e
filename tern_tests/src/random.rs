//! Random formulas, and a schedule of formula sizes.
//!
//! Clauses have one, two, or three literals, with probabilities 0.01, 0.30, and 0.69, though never more literals than atoms.
//! The literals of a clause are on distinct atoms, each with a random polarity.

use rand::{seq::index, Rng};

use tern_sat::structures::{
    atom::Atom,
    clause::CClause,
    literal::{CLiteral, Literal},
};

use crate::formula::Formula;

/// A random clause over atoms `1..=atoms`.
pub fn random_clause(rng: &mut impl Rng, atoms: usize) -> CClause {
    let length = match rng.random::<f64>() {
        draw if draw < 0.01 => 1,
        draw if draw < 0.31 => 2,
        _ => 3,
    };

    index::sample(rng, atoms, length.min(atoms))
        .into_iter()
        .map(|index| CLiteral::new(index as Atom + 1, rng.random_bool(0.5)))
        .collect()
}

/// A random formula with the given counts of atoms and clauses.
pub fn random_formula(rng: &mut impl Rng, atoms: usize, clauses: usize) -> Formula {
    Formula {
        atoms,
        clauses: (0..clauses).map(|_| random_clause(rng, atoms)).collect(),
    }
}

/// A point in a [Schedule].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trial {
    pub iteration: usize,
    pub atoms: usize,
    pub clauses: usize,
}

/// A schedule of growing formula sizes.
///
/// The count of clauses is the iteration, and the count of atoms grows by one every fourth iteration.
/// The schedule ends once both maximums have been passed.
#[derive(Clone, Debug)]
pub struct Schedule {
    iteration: usize,
    atoms: usize,
    max_atoms: usize,
    max_clauses: usize,
}

impl Schedule {
    /// A schedule beginning with `initial_atoms`.
    ///
    /// Formulas with no atoms would contain empty clauses, and so at least one atom is used.
    pub fn new(initial_atoms: usize, max_atoms: usize, max_clauses: usize) -> Self {
        Schedule {
            iteration: 0,
            atoms: initial_atoms.max(1),
            max_atoms,
            max_clauses,
        }
    }
}

impl Iterator for Schedule {
    type Item = Trial;

    fn next(&mut self) -> Option<Self::Item> {
        if self.iteration > self.max_clauses && self.atoms > self.max_atoms {
            return None;
        }

        self.iteration += 1;
        if self.iteration % 4 == 0 {
            self.atoms += 1;
        }

        Some(Trial {
            iteration: self.iteration,
            atoms: self.atoms,
            clauses: self.iteration,
        })
    }
}
