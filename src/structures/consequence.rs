//! Assignments of values to atoms, and the reason for an assignment.

use crate::{db::LevelIndex, structures::atom::Atom};

/// The source of an assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssignmentSource {
    /// A free decision.
    Decision,

    /// A consequence of a clause whose only atom is the assigned atom.
    Unit,

    /// A consequence of unit propagation on a clause, with the other atoms of the clause as antecedents.
    Propagation(Vec<Atom>),
}

impl AssignmentSource {
    /// The source of an assignment forced by a clause whose other atoms are `antecedents`.
    pub fn from_antecedents(antecedents: Vec<Atom>) -> Self {
        match antecedents.is_empty() {
            true => Self::Unit,
            false => Self::Propagation(antecedents),
        }
    }

    /// The atoms whose values forced the assignment, if any.
    pub fn antecedents(&self) -> &[Atom] {
        match self {
            Self::Decision | Self::Unit => &[],
            Self::Propagation(atoms) => atoms,
        }
    }

    /// True if the assignment was a free decision.
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::Decision)
    }
}

/// The value assigned to some atom, the level at which the value was assigned, and the reason for the assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// The value of the atom.
    pub value: bool,

    /// The decision level at which the value was assigned.
    pub level: LevelIndex,

    /// Why the atom has the value.
    pub source: AssignmentSource,
}
