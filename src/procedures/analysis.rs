/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and returns a clause which is a consequence of the clause database, together with the level to backjump to.

# Method

Each atom with a value was valued by a decision, by a unit clause, or through propagation on some clause.
In the last case, the source of the value records the *antecedents* of the atom, the other atoms of the propagating clause.

Beginning from the atoms of the unsatisfiable clause, analysis replaces each atom which was not valued by a decision with its antecedents, until only atoms valued by a decision remain.
Atoms valued by a unit clause have no antecedents, and so are simply removed.

The learnt clause then contains, for each remaining atom, the literal which is false on the current valuation.
In other words, the learnt clause is the negation of the decisions responsible for the conflict.

Each replacement is a resolution step on the clause which propagated the replaced atom, and so the learnt clause is a consequence of the clause database.

# Order

Literals of the learnt clause are ordered by atom.

# Example

```rust
# use tern_sat::context::Context;
# use tern_sat::config::Config;
let mut the_context = Context::from_config(Config::default());
assert!(the_context.add_clause(vec![-1, 2]).is_ok());
assert!(the_context.add_clause(vec![-1, -2]).is_ok());

assert!(the_context.make_decision().is_ok());
assert_eq!(the_context.unit_propagation(), Ok(true));

let conflict = the_context.check_conflict().unwrap();
let result = the_context.conflict_analysis(&conflict).unwrap();

assert_eq!(result.clause, vec![-1]);
assert_eq!(result.backjump_level, 0);
```
*/

use crate::{
    context::Context,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause, ClauseStatus},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The result of conflict analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    /// The learnt clause, which may be empty.
    pub clause: CClause,

    /// The level at which the learnt clause asserts some literal.
    pub backjump_level: LevelIndex,
}

impl Context {
    /// Learns a clause from the clause with the given key, which must be unsatisfiable on the current valuation.
    ///
    /// An empty clause is returned if the conflict follows from unit clauses alone.
    pub fn learn_clause(&self, key: &ClauseKey) -> Result<CClause, err::ErrorKind> {
        let conflict = self.clause_db.get(key)?;

        if self.atom_db.status_of(conflict) != ClauseStatus::Unsatisfiable {
            log::error!(target: targets::ANALYSIS, "Analysis of {key}, which is not unsatisfiable");
            return Err(err::ErrorKind::from(err::AnalysisError::NoConflict));
        }

        let mut seen = vec![false; self.atom_db.count() + 1];
        let mut stack: Vec<Atom> = Vec::default();
        for atom in conflict.atoms() {
            if !seen[atom as usize] {
                seen[atom as usize] = true;
                stack.push(atom);
            }
        }

        let mut decisions: Vec<Atom> = Vec::default();

        while let Some(atom) = stack.pop() {
            match self.atom_db.source_of(atom) {
                None => return Err(err::ErrorKind::from(err::AtomDBError::Unassigned(atom))),

                Some(source) if source.is_decision() => decisions.push(atom),

                Some(source) => {
                    for antecedent in source.antecedents() {
                        if !seen[*antecedent as usize] {
                            seen[*antecedent as usize] = true;
                            stack.push(*antecedent);
                        }
                    }
                }
            }
        }

        decisions.sort_unstable();

        let mut clause = CClause::with_capacity(decisions.len());
        for atom in decisions {
            match self.atom_db.value_of(atom) {
                Some(value) => clause.push(CLiteral::new(atom, !value)),
                None => return Err(err::ErrorKind::from(err::AtomDBError::Unassigned(atom))),
            }
        }

        log::info!(target: targets::ANALYSIS, "Learnt {} from {key}", clause.as_dimacs(true));
        Ok(clause)
    }

    /// Learns a clause from the clause with the given key, and determines the level to backjump to.
    ///
    /// For documentation, see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&self, key: &ClauseKey) -> Result<AnalysisResult, err::ErrorKind> {
        let clause = self.learn_clause(key)?;

        let backjump_level = match clause.is_empty() {
            true => 0,
            false => self.non_chronological_backjump_level(&clause)?,
        };

        Ok(AnalysisResult {
            clause,
            backjump_level,
        })
    }
}
