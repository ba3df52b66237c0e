/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 1, or:
- *u - 1* is an atom.

That the atoms are [1..=*m*] for some *m*, as in the DIMACS representation of a formula.

This representation allows atoms to be used as the indicies of a structure, e.g. `cells[a]`, without taking too much space.
The zero index of any such structure is unused.

```rust
# use tern_sat::structures::atom::{Atom, ATOM_MAX};
let atoms = (1..=97).collect::<Vec<Atom>>();
assert!(atoms.iter().all(|atom| *atom <= ATOM_MAX));
```

In the SAT literature atoms are often called 'variables' while in the logic literature they are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded by the largest positive [CLiteral](crate::structures::literal::CLiteral).
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
