/*!
Reference solvers, independent of the engine.

- [dpll], a Davis-Putnam-Logemann-Loveland search with unit propagation and pure literal elimination.
- [exhaustive], a check of every valuation, for formulas on at most [EXHAUSTIVE_LIMIT] atoms.

Neither solver learns, and both work directly on a [Formula].
*/

use tern_sat::{
    reports::{solution_lines, Report},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

use crate::formula::Formula;

/// The most atoms [exhaustive] will examine.
pub const EXHAUSTIVE_LIMIT: usize = 20;

type Assignment = Vec<Option<bool>>;

fn literal_value(assignment: &Assignment, literal: CLiteral) -> Option<bool> {
    assignment[literal.atom() as usize].map(|value| value == literal.polarity())
}

fn satisfied(assignment: &Assignment, clause: &[CLiteral]) -> bool {
    clause
        .iter()
        .any(|literal| literal_value(assignment, *literal) == Some(true))
}

/// Assigns atoms for unit clauses and pure literals until neither apply.
///
/// Returns false on a conflict.
/// Each assigned atom is pushed to `trail`.
fn simplify(formula: &Formula, assignment: &mut Assignment, trail: &mut Vec<Atom>) -> bool {
    loop {
        let mut changed = false;

        for clause in &formula.clauses {
            if satisfied(assignment, clause) {
                continue;
            }

            let mut open = clause
                .iter()
                .filter(|literal| literal_value(assignment, **literal).is_none());

            match (open.next(), open.next()) {
                (None, _) => return false,

                (Some(literal), None) => {
                    assignment[literal.atom() as usize] = Some(literal.polarity());
                    trail.push(literal.atom());
                    changed = true;
                }

                _ => {}
            }
        }

        // Polarities of open literals in unsatisfied clauses, as (positive, negative).
        let mut polarities = vec![(false, false); formula.atoms + 1];
        for clause in &formula.clauses {
            if satisfied(assignment, clause) {
                continue;
            }
            for literal in clause {
                if literal_value(assignment, *literal).is_none() {
                    let entry = &mut polarities[literal.atom() as usize];
                    match literal.polarity() {
                        true => entry.0 = true,
                        false => entry.1 = true,
                    }
                }
            }
        }

        for (atom, polarity) in polarities.into_iter().enumerate() {
            let value = match polarity {
                (true, false) => true,
                (false, true) => false,
                _ => continue,
            };
            if assignment[atom].is_none() {
                assignment[atom] = Some(value);
                trail.push(atom as Atom);
                changed = true;
            }
        }

        if !changed {
            return true;
        }
    }
}

fn dpll_search(formula: &Formula, assignment: &mut Assignment) -> bool {
    let mut trail = Vec::default();

    if simplify(formula, assignment, &mut trail) {
        let open_atom = formula
            .clauses
            .iter()
            .filter(|clause| !satisfied(assignment, clause))
            .flat_map(|clause| clause.iter())
            .map(|literal| literal.atom())
            .find(|atom| assignment[*atom as usize].is_none());

        match open_atom {
            None => return true,

            Some(atom) => {
                for value in [true, false] {
                    assignment[atom as usize] = Some(value);
                    if dpll_search(formula, assignment) {
                        return true;
                    }
                }
                assignment[atom as usize] = None;
            }
        }
    }

    for atom in trail {
        assignment[atom as usize] = None;
    }
    false
}

/// A model of `formula` if one exists, found by DPLL search.
///
/// The model contains a literal for each atom from 1 to the atom count of the formula.
/// Atoms without a value from the search are taken to be true.
pub fn dpll(formula: &Formula) -> Option<Vec<CLiteral>> {
    let mut assignment = vec![None; formula.atoms + 1];

    match dpll_search(formula, &mut assignment) {
        true => Some(
            (1..=formula.atoms)
                .map(|atom| CLiteral::new(atom as Atom, assignment[atom].unwrap_or(true)))
                .collect(),
        ),

        false => None,
    }
}

/// A model of `formula` if one exists, found by checking each valuation in turn.
///
/// # Panics
/// If the formula has more than [EXHAUSTIVE_LIMIT] atoms.
pub fn exhaustive(formula: &Formula) -> Option<Vec<CLiteral>> {
    assert!(formula.atoms <= EXHAUSTIVE_LIMIT, "Too many atoms");

    for bits in 0_u32..(1 << formula.atoms) {
        let model = (1..=formula.atoms)
            .map(|atom| CLiteral::new(atom as Atom, bits & (1 << (atom - 1)) != 0))
            .collect::<Vec<_>>();

        if formula.satisfied_by(&model) {
            return Some(model);
        }
    }

    None
}

/// Output of the reference solver on `formula`, with the same lines as the engine.
pub fn reference_output(formula: &Formula) -> String {
    match dpll(formula) {
        Some(model) => solution_lines(Report::Satisfiable, Some(model.as_slice())),
        None => solution_lines(Report::Unsatisfiable, None),
    }
}
