//! Key structures, such as atoms, literals and clauses.
//!
//! Literals and clauses are defined first as traits, with a 'canonical' implementation of the trait used throughout the library.
//!
//! # Formulas
//!
//! A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//!
//! The conjunction of clauses in the [clause database](crate::db::clause) is a formula which is always entailed by the formula given to the context, as the database only ever grows by clauses derived through resolution.
//!
//! # Values
//!
//! A value is one of [true] or [false]. \
//! An atom without a value is represented by [None] wherever a value is optional.

pub mod atom;
pub mod clause;
pub mod consequence;
pub mod literal;
pub mod valuation;
