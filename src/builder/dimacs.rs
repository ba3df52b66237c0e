use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{atom::Atom, clause::CClause},
    types::err::{self},
};

use std::io::BufRead;

/// Information about a DIMACS formula read into a context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given by the problem specification, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given by the problem specification, if any.
    pub expected_clauses: Option<usize>,

    /// The count of atoms added to the context.
    pub added_atoms: usize,

    /// The count of clauses read and added to the context, including any tautologies.
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS file into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// - Lines beginning with `c` are comments.
    /// - A line beginning with `p` is the problem specification, `p cnf <atoms> <clauses>`.
    ///   The atoms of the specification are added to the context, though clauses may extend the specified atoms.
    /// - A line beginning with `%` ends the formula.
    /// - Otherwise, a line contains literals, with each clause terminated by `0`.
    ///   A clause may span many lines, and a line may contain many clauses.
    ///   A clause without termination at the end of the input is added.
    ///
    /// An empty clause is an error, as is any token which is not an integer.
    ///
    /// ```rust
    /// # use tern_sat::context::Context;
    /// # use tern_sat::config::Config;
    /// # use tern_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c An example
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_atoms, Some(4));
    /// assert_eq!(info.added_clauses, 7);
    ///
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();
        let initial_atoms = self.atom_db.count();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                Some('c') => {}

                Some('%') => break 'formula_loop,

                Some('p') => {
                    if info.expected_atoms.is_some() {
                        log::error!(target: targets::PARSER, "A second problem specification at line {line_counter}");
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                    }

                    let (atom_count, clause_count) = parse_problem_specification(&buffer)?;
                    log::info!(target: targets::PARSER, "Expecting {atom_count} atoms and {clause_count} clauses");

                    let top_atom = match Atom::try_from(atom_count) {
                        Ok(atom) => atom,
                        Err(_) => return Err(err::ErrorKind::from(err::AtomDBError::AtomsExhausted)),
                    };
                    self.ensure_atom(top_atom)?;

                    info.expected_atoms = Some(atom_count);
                    info.expected_clauses = Some(clause_count);
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        let literal = match item.parse::<i32>() {
                            Ok(int) => int,
                            Err(_) => {
                                log::error!(target: targets::PARSER, "Unreadable '{item}' at line {line_counter}");
                                return Err(err::ErrorKind::from(err::ParseError::Line(line_counter)));
                            }
                        };

                        match literal {
                            0 if clause_buffer.is_empty() => {
                                return Err(err::ErrorKind::from(err::ParseError::EmptyClause(
                                    line_counter,
                                )));
                            }

                            0 => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.added_clauses += 1;
                            }

                            _ => clause_buffer.push(literal),
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::info!(target: targets::PARSER, "Unterminated clause at the end of input");
            self.add_clause(clause_buffer)?;
            info.added_clauses += 1;
        }

        info.added_atoms = self.atom_db.count() - initial_atoms;

        if info
            .expected_clauses
            .is_some_and(|count| count != info.added_clauses)
        {
            log::warn!(target: targets::PARSER, "Expected {:?} clauses, read {}", info.expected_clauses, info.added_clauses);
        }

        Ok(info)
    }
}

/// The atom and clause counts of a problem specification line, `p cnf <atoms> <clauses>`.
fn parse_problem_specification(line: &str) -> Result<(usize, usize), err::ParseError> {
    let mut problem_details = line.split_whitespace();

    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(err::ParseError::ProblemSpecification),
    }

    let atom_count: usize = match problem_details.next().map(str::parse) {
        Some(Ok(count)) => count,
        _ => return Err(err::ParseError::ProblemSpecification),
    };

    let clause_count: usize = match problem_details.next().map(str::parse) {
        Some(Ok(count)) => count,
        _ => return Err(err::ParseError::ProblemSpecification),
    };

    Ok((atom_count, clause_count))
}
