/*!
A context method for unit propagation.

See [Context::unit_propagation] for the relevant context method.

# Overview

A clause is *asserting* on a valuation when every literal of the clause is false, except for one literal without a value.
The asserting literal must be true on any extension of the valuation which satisfies the clause, and unit propagation assigns the atom of the literal the value which makes it true.

The clause database is scanned in order, and the first asserting clause found is used.
So, at most one assignment is made by each call, and clauses added earlier take priority over those added later.

The source of the assignment records the atoms of the clause other than the atom assigned, as these are the atoms whose values forced the assignment.
If there are no other atoms the clause is a unit clause, and the source is [Unit](AssignmentSource::Unit).

# Example

```rust
# use tern_sat::context::Context;
# use tern_sat::config::Config;
let mut the_context = Context::from_config(Config::default());
assert!(the_context.add_clause(vec![-1, 2]).is_ok());
assert!(the_context.add_clause(vec![1]).is_ok());

assert_eq!(the_context.unit_propagation(), Ok(true));
assert_eq!(the_context.value_of(1), Some(true));

assert_eq!(the_context.unit_propagation(), Ok(true));
assert_eq!(the_context.value_of(2), Some(true));

assert_eq!(the_context.unit_propagation(), Ok(false));
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseStatus},
        consequence::AssignmentSource,
        literal::Literal,
    },
    types::err::{self},
};

impl Context {
    /// Assigns the asserted literal of the first asserting clause in the clause database, if any.
    ///
    /// Returns true if an assignment was made, and false otherwise.
    pub fn unit_propagation(&mut self) -> Result<bool, err::ErrorKind> {
        let mut propagation = None;

        for clause in self.clause_db.all_clauses() {
            if let ClauseStatus::Asserting(literal) = self.atom_db.status_of(clause) {
                let antecedents = clause
                    .atoms()
                    .filter(|atom| *atom != literal.atom())
                    .collect();

                log::trace!(target: targets::PROPAGATION, "{literal} asserted by {}", clause.key());
                propagation = Some((literal, AssignmentSource::from_antecedents(antecedents)));
                break;
            }
        }

        match propagation {
            Some((literal, source)) => {
                self.assign(literal.atom(), literal.polarity(), source)?;
                self.counters.total_propagations += 1;
                Ok(true)
            }

            None => Ok(false),
        }
    }
}
