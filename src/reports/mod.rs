/*!
Reports for the context.
*/

use crate::{context::ContextState, structures::literal::CLiteral};

/// The solution line written when a formula could not be read or solved.
pub const ERROR_LINE: &str = "s ERROR";

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable(_) => Self::Unsatisfiable,
        }
    }
}

/// The report as it appears on a DIMACS solution line, e.g. `s SATISFIABLE`.
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The solution lines for a report, in DIMACS output form.
///
/// An `s` line, followed by a `v` line if the report is [Satisfiable](Report::Satisfiable) and a model is given.
/// The `v` line lists each literal of the model, and is terminated by `0`.
///
/// ```rust
/// # use tern_sat::reports::{solution_lines, Report};
/// assert_eq!(solution_lines(Report::Satisfiable, Some(&[1, -2][..])), "s SATISFIABLE\nv 1 -2 0\n");
/// assert_eq!(solution_lines(Report::Satisfiable, None), "s SATISFIABLE\n");
/// assert_eq!(solution_lines(Report::Unsatisfiable, Some(&[1][..])), "s UNSATISFIABLE\n");
/// ```
pub fn solution_lines(report: Report, model: Option<&[CLiteral]>) -> String {
    let mut lines = format!("s {report}\n");

    if let (Report::Satisfiable, Some(model)) = (report, model) {
        lines.push('v');
        for literal in model {
            lines.push_str(format!(" {literal}").as_str());
        }
        lines.push_str(" 0\n");
    }

    lines
}
