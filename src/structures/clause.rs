//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use tern_sat::structures::clause::{Clause, ClauseStatus};
//! let clause = vec![1, -2, 3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
//!
//! let mut valuation = vec![None, Some(false), Some(true), None];
//! assert_eq!(clause.status_on(&valuation), ClauseStatus::Asserting(3));
//!
//! valuation[3] = Some(false);
//! assert_eq!(clause.status_on(&valuation), ClauseStatus::Unsatisfiable);
//! ```
//!
//! - The empty clause is always false (never true), and is never stored.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A clause derived via resolution during conflict analysis.
    Resolution,
}

/// The status of a clause on some valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// Every literal of the clause is false.
    Unsatisfiable,

    /// Every literal of the clause is false, except the given literal, which has no value.
    Asserting(CLiteral),

    /// At least two literals of the clause have no value, and no literal is true.
    Open,
}

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// An iterator over all atoms in the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The status of the clause on the given valuation.
    ///
    /// An atom outside of the valuation is treated as an atom without a value.
    fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus;

    /// Returns whether the clause is satisfied on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        matches!(self.status_on(valuation), ClauseStatus::Satisfied)
    }
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus {
        let mut unvalued = None;
        let mut unvalued_count = 0;

        for literal in self {
            match valuation.value_of(literal.atom()).flatten() {
                Some(value) if literal.is_satisfied_by(value) => return ClauseStatus::Satisfied,
                Some(_) => {}
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
}

impl Clause for VClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.as_slice().atoms()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus {
        self.as_slice().status_on(valuation)
    }
}
