/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::Context::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::Context::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods.
In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral](crate::structures::literal::CLiteral)s from the atoms.
- Bundle the literals into a [CClause](crate::structures::clause::CClause).
- Add the clause to the context.

Though, as adding a clause ensures each atom of the clause is part of the context, the first step may be skipped.

In addition, a formula may be read from a DIMACS source, via [read_dimacs](crate::context::Context::read_dimacs).

# Examples

A clause built using basic methods.

```rust
# use tern_sat::context::Context;
# use tern_sat::config::Config;
# use tern_sat::reports::Report;
# use tern_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```

Tautologies are not added, and duplicate literals are removed.

```rust
# use tern_sat::context::Context;
# use tern_sat::config::Config;
# use tern_sat::builder::ClauseOk;
#
let mut the_context = Context::from_config(Config::default());

assert_eq!(the_context.add_clause(vec![1, -3, 1]), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause(vec![2, -2]), Ok(ClauseOk::Tautology));

assert_eq!(the_context.atom_db.count(), 3);
assert_eq!(the_context.clause_db.clause_count(), 1);
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

mod preprocess;

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use preprocess::{preprocess_clause, PreprocessingOk};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,
}

impl Context {
    /// Returns a fresh atom.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let atom = self.atom_db.fresh_atom()?;
        self.reopen_input();
        Ok(atom)
    }

    /// Returns a fresh literal with value true.
    pub fn fresh_literal(&mut self) -> Result<CLiteral, err::AtomDBError> {
        let atom = self.fresh_atom()?;
        Ok(CLiteral::new(atom, true))
    }

    /// Returns a vector containing `count` fresh literals, each with value true.
    pub fn fresh_literals(&mut self, count: usize) -> Result<Vec<CLiteral>, err::AtomDBError> {
        let mut literals = Vec::with_capacity(count);
        for _ in 0..count {
            literals.push(self.fresh_literal()?);
        }
        Ok(literals)
    }

    /// Ensure `atom` is present in the context, by introducing as many atoms as required to ensure atoms form a contiguous block from 1 to `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), err::AtomDBError> {
        let initial_count = self.atom_db.count();
        self.atom_db.ensure_atom(atom)?;
        if self.atom_db.count() > initial_count {
            self.reopen_input();
        }
        Ok(())
    }

    /// Returns a satisfiable context to input, as the formula of the context has changed.
    ///
    /// An unsatisfiable context remains unsatisfiable, as no addition restores satisfiability.
    fn reopen_input(&mut self) {
        if self.state == ContextState::Satisfiable {
            self.state = ContextState::Input;
        }
    }

    /// Adds a clause to the context.
    ///
    /// Clauses may only be added before any decision has been made.
    /// So, to add a clause after a solve, [clear_decisions](Context::clear_decisions) first.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<ClauseOk, err::ErrorKind> {
        if self.trail.level() > 0 {
            log::error!(target: targets::CLAUSE_DB, "Attempt to add a clause after a decision");
            return Err(err::ErrorKind::from(err::ClauseDBError::DecisionMade));
        }

        let mut clause: CClause = clause.into();
        if clause.is_empty() {
            return Err(err::ErrorKind::from(err::ClauseDBError::EmptyClause));
        }

        for literal in &clause {
            match literal.atom() {
                0 => return Err(err::ErrorKind::from(err::AtomDBError::Unknown(0))),
                atom => self.ensure_atom(atom)?,
            }
        }

        if preprocess_clause(&mut clause) == PreprocessingOk::Tautology {
            log::trace!(target: targets::CLAUSE_DB, "Skipped tautology");
            return Ok(ClauseOk::Tautology);
        }

        self.clause_db.store(clause, ClauseSource::Original)?;
        self.reopen_input();

        Ok(ClauseOk::Added)
    }
}
