//! Helpers for testing the solver against fixture formulas and an independent reference solver.

pub mod differential;
pub mod formula;
pub mod general;
pub mod minimal_pcg;
pub mod random;
pub mod reference;

pub use general::{cnf_dir, cnf_files, engine_output, load_dimacs, silent_formula_report, verdict};
