//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some are external, e.g. a parse error when reading a DIMACS formula with an empty clause.
//!
//! Note, a formula being found unsatisfiable is not an error.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    Parse(ParseError),

    /// A literal of a clause had no decision level when determining a backjump level.
    Backjump,

    /// Something was requested of a context which its state does not support.
    InvalidState,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Analysis was requested of a clause which is not unsatisfiable on the current valuation.
    NoConflict,

    /// After a backjump the learnt clause failed to assert a literal.
    NoAssertion,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// The atom is not part of the database.
    Unknown(Atom),

    /// A value was given to an atom which already has some value.
    Valued(Atom),

    /// A value was required of an atom without a value.
    Unassigned(Atom),
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// A clause was added after some decision has been made.
    DecisionMade,

    /// A key without a clause.
    MissingKey,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when configuring a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value is outside of the bounds of the option with the given name.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// An empty clause, at a specific line.
    EmptyClause(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => write!(f, "Malformed problem specification"),
            Self::Line(line) => write!(f, "Unreadable input at line {line}"),
            Self::EmptyClause(line) => write!(f, "Empty clause at line {line}"),
        }
    }
}
