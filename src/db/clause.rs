/*!
A database of clauses.

The clause database is an append-only sequence of clauses.
Clauses read from a formula are stored first, and clauses derived through conflict analysis are stored as they are learnt.

Clauses are accessed through [keys](ClauseKey), issued in order of addition.
As no clause is ever removed, the order of keys is the order of the database, and the scans made during propagation and conflict detection follow this order.

```rust
# use tern_sat::db::clause::ClauseDB;
# use tern_sat::structures::clause::ClauseSource;
let mut clause_db = ClauseDB::default();

let key = clause_db.store(vec![1, -2], ClauseSource::Original).unwrap();
assert!(clause_db.store(vec![], ClauseSource::Original).is_err());

assert_eq!(clause_db.get(&key).unwrap().literals(), &[1, -2]);
assert_eq!(clause_db.clause_count(), 1);
```
*/

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, ClauseSource},
        literal::CLiteral,
    },
    types::err::{self},
};

/// A clause together with metadata used by the clause database.
#[derive(Clone, Debug)]
pub struct DBClause {
    key: ClauseKey,
    source: ClauseSource,
    clause: CClause,
}

impl DBClause {
    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The source of the clause.
    pub fn source(&self) -> ClauseSource {
        self.source
    }

    /// The literals of the clause, in the order given when the clause was stored.
    pub fn literals(&self) -> &[CLiteral] {
        &self.clause
    }
}

impl std::ops::Deref for DBClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

#[derive(Default)]
pub struct ClauseDB {
    clauses: Vec<DBClause>,
    original_count: usize,
    learnt_count: usize,
}

impl ClauseDB {
    /// Stores a clause, returning the key of the clause.
    ///
    /// No check is made for duplicate literals, etc.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.is_empty() {
            log::error!(target: targets::CLAUSE_DB, "Attempt to store an empty clause");
            return Err(err::ClauseDBError::EmptyClause);
        }

        let key = ClauseKey(self.clauses.len());
        log::trace!(target: targets::CLAUSE_DB, "Storing {key}: {}", clause.as_dimacs(false));

        match source {
            ClauseSource::Original => self.original_count += 1,
            ClauseSource::Resolution => self.learnt_count += 1,
        }

        self.clauses.push(DBClause {
            key,
            source,
            clause,
        });
        Ok(key)
    }

    /// The clause with the given key.
    pub fn get(&self, key: &ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        self.clauses
            .get(key.index())
            .ok_or(err::ClauseDBError::MissingKey)
    }

    /// An iterator over all clauses, in order of addition.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.clauses.iter()
    }

    /// An iterator over all clauses read from a formula, in order of addition.
    pub fn original_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.all_clauses()
            .filter(|clause| clause.source() == ClauseSource::Original)
    }

    /// An iterator over all clauses learnt through analysis, in order of addition.
    pub fn learnt_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.all_clauses()
            .filter(|clause| clause.source() == ClauseSource::Resolution)
    }

    /// A count of all clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of clauses read from a formula.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// A count of clauses learnt through analysis.
    pub fn learnt_count(&self) -> usize {
        self.learnt_count
    }
}
