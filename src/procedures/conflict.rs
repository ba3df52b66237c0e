//! Detection of a clause which is false on the current valuation.
//!
//! The clause database is scanned in order, and the key of the first clause with every literal false is returned.

use crate::{context::Context, db::ClauseKey, structures::clause::ClauseStatus};

impl Context {
    /// The key of the first clause unsatisfiable on the current valuation, if any.
    ///
    /// ```rust
    /// # use tern_sat::context::Context;
    /// # use tern_sat::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    /// assert!(the_context.add_clause(vec![1, 2]).is_ok());
    /// assert!(the_context.add_clause(vec![-1]).is_ok());
    /// assert!(the_context.check_conflict().is_none());
    ///
    /// assert!(the_context.make_decision().is_ok());
    /// assert!(the_context.check_conflict().is_some());
    /// ```
    pub fn check_conflict(&self) -> Option<ClauseKey> {
        self.clause_db
            .all_clauses()
            .find(|clause| self.atom_db.status_of(clause) == ClauseStatus::Unsatisfiable)
            .map(|clause| clause.key())
    }
}
