/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is unused, as atoms begin at 1.
- Each non-zero index of the vector is interpreted as an atom.

In other words, the canonical representation of a valuation 𝐯 is a vector *v* such that:
-  *v*\[a\] = Some(true) *if any only if* 𝐯(a) = true.
-  *v*\[a\] = Some(false) *if any only if* 𝐯(a) = false.
-  *v*\[a\] = None *if any only if* 𝐯(a) is undefined.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use tern_sat::structures::valuation::Valuation;
let valuation = vec![None, None, Some(true), None];

assert_eq!(valuation.value_of(2), Some(Some(true)));
assert_eq!(valuation.value_of(4), None);
assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![1, 3]);
assert_eq!(valuation.atom_count(), 3);
```
*/

use super::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator over the values of atoms in the valuation, in strict atom order from atom 1.
    fn values(&self) -> impl Iterator<Item = Option<bool>>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;

    /// The valuation as literals, in atom order, if the valuation is full.
    fn full_literals(&self) -> Option<Vec<CLiteral>> {
        let mut literals = Vec::with_capacity(self.atom_count());
        for (index, value) in self.values().enumerate() {
            literals.push(CLiteral::new(index as Atom + 1, value?));
        }
        Some(literals)
    }
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        match atom {
            0 => None,
            _ => self.get(atom as usize).copied(),
        }
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> {
        self.iter().skip(1).copied()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}
