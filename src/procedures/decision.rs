/*!
Methods for choosing the value of an atom.

# Overview

The decision procedure is straightforward:
- Search through all atoms in the context, in order, for the first atom which is not assigned a value, and assign the atom the value true.

Each decision opens a fresh decision level, and the decided atom is the first atom valued at that level.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
As every decision assigns true, the literal of a decision is always the atom of the decision.

```rust
# use tern_sat::context::Context;
# use tern_sat::config::Config;
# use tern_sat::procedures::decision::DecisionOk;
let mut the_context = Context::from_config(Config::default());
assert!(the_context.add_clause(vec![-1, -2]).is_ok());

assert_eq!(the_context.pick_atom(), Some(1));
assert_eq!(the_context.make_decision(), Ok(DecisionOk::Literal(1)));
assert_eq!(the_context.level(), 1);
assert_eq!(the_context.pick_atom(), Some(2));
```
*/

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl Context {
    /// The first atom, in atom order, without a value on the current valuation.
    pub fn pick_atom(&self) -> Option<Atom> {
        self.atom_db
            .atoms()
            .find(|atom| self.atom_db.value_of(*atom).is_none())
    }

    /// Makes a decision, opening a fresh decision level.
    ///
    /// ```rust, ignore
    /// match self.make_decision()? {
    ///     DecisionOk::Literal(_) => continue,
    ///     DecisionOk::Exhausted => break,
    /// }
    /// ```
    pub fn make_decision(&mut self) -> Result<DecisionOk, err::ErrorKind> {
        match self.pick_atom() {
            Some(chosen_atom) => {
                self.counters.total_decisions += 1;

                let decision_literal = CLiteral::new(chosen_atom, true);
                self.trail.open_level();
                log::trace!(target: targets::DECISION, "Decision {decision_literal} at level {}", self.trail.level());

                self.assign(
                    decision_literal.atom(),
                    decision_literal.polarity(),
                    AssignmentSource::Decision,
                )?;

                Ok(DecisionOk::Literal(decision_literal))
            }

            None => Ok(DecisionOk::Exhausted),
        }
    }

    /// Resets all decisions and consequences of those choices.
    ///
    /// In other words, backjumps to before any decision was made, after which further clauses may be added.
    /// Unsatisfiability of a context is kept, as adding clauses cannot make an unsatisfiable formula satisfiable.
    pub fn clear_decisions(&mut self) {
        self.backjump(0);
        if !matches!(self.state, ContextState::Unsatisfiable(_)) {
            self.state = ContextState::Input;
        }
    }
}
