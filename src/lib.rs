//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! tern_sat is a small conflict-driven clause-learning solver.
//! The solver propagates units, learns a clause from each conflict, and backjumps non-chronologically, though without the heuristics or indexing of a competitive solver.
//! So, each part of a solve is simple enough to be checked by hand.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Clauses may be added through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_clause).
//!
//! Internally, a solve is viewed in terms of manipulation of a handful of databases:
//! - A formula is stored in a [clause database](crate::db::clause).
//! - A valuation is stored in an [atom database](crate::db::atom), together with the level and source of each value.
//! - The order of the valuation is stored on a [trail](crate::db::trail).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation (formulas, clauses, etc.)
//!
//! # Examples
//!
//! + Find (a count of) all valuations of some collection of atoms.
//!
//! ```rust
//! # use tern_sat::config::Config;
//! # use tern_sat::context::Context;
//! # use tern_sat::reports::Report;
//! # use tern_sat::structures::literal::Literal;
//! let mut the_context = Context::from_config(Config::default());
//! let characters = "model".chars().collect::<Vec<_>>();
//! for _ in &characters {
//!     assert!(the_context.fresh_atom().is_ok())
//! }
//!
//! let mut count = 0;
//!
//! loop {
//!     match the_context.solve() {
//!         Ok(Report::Satisfiable) => {}
//!         _ => break,
//!     };
//!
//!     count += 1;
//!
//!     let clause = the_context
//!         .model()
//!         .unwrap()
//!         .iter()
//!         .map(|literal| literal.negate())
//!         .collect::<Vec<_>>();
//!
//!     the_context.clear_decisions();
//!
//!     match the_context.add_clause(clause) {
//!         Ok(_) => {}
//!         Err(_) => break,
//!     };
//! }
//!
//! assert_eq!(count, 2_usize.pow(characters.len().try_into().unwrap()));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use tern_sat::context::Context;
//! # use tern_sat::config::Config;
//! # use tern_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Learnt clauses without the details of propagation can be found with `RUST_LOG=analysis=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
