/*!
The context, to which formulas are added and within which solves take place.

A context owns every structure used during a solve:
- The [configuration](crate::config).
- The [clause database](crate::db::clause), the [atom database](crate::db::atom), and the [trail](crate::db::trail).
- Some [counters](Counters).

And, a context is the only thing with control over the progress of a solve, via the [procedures](crate::procedures).
There are no other mutable structures, and so any number of contexts may exist (and solve) independently.

# Example
```rust
# use tern_sat::context::Context;
# use tern_sat::config::Config;
# use tern_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_atom().unwrap() as i32;
let q = the_context.fresh_atom().unwrap() as i32;

assert!(the_context.add_clause(vec![p, q]).is_ok());
assert!(the_context.add_clause(vec![-p]).is_ok());

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

assert_eq!(the_context.value_of(p as u32), Some(false));
assert_eq!(the_context.value_of(q as u32), Some(true));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, ClauseKey, LevelIndex},
    reports::Report,
    structures::{atom::Atom, literal::CLiteral, valuation::Valuation},
    types::err::ErrorKind,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The consistency of the database is unknown, and a solve is underway.
    Solving,

    /// The database is known to be consistent, with a complete valuation.
    Satisfiable,

    /// The database is known to be inconsistent, with the key of the clause on which the inconsistency was found.
    Unsatisfiable(ClauseKey),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            trail: Trail::default(),
            state: ContextState::Input,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The clause with which unsatisfiability of the context was determined.
    pub fn unsatisfiable_clause(&self) -> Result<ClauseKey, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable(key) => Ok(key),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// The value of an atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The model found by a solve, as a literal for each atom in atom order.
    ///
    /// Only available if the context is known to be satisfiable.
    pub fn model(&self) -> Option<Vec<CLiteral>> {
        match self.state {
            ContextState::Satisfiable => self.atom_db.valuation().full_literals(),
            _ => None,
        }
    }
}
