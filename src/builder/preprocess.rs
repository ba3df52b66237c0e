use crate::structures::{clause::CClause, literal::Literal};

/// Distinguishes a tautology from any other clause.
#[derive(Debug, PartialEq, Eq)]
pub enum PreprocessingOk {
    /// A tautology.
    Tautology,

    /// Any clause.
    Clause,
}

/// Removes duplicate literals from a clause, keeping the first occurrence of each literal.
///
/// If the clause contains some literal together with its negation the clause is a tautology, and is left as it was.
pub(super) fn preprocess_clause(clause: &mut CClause) -> PreprocessingOk {
    let mut kept = CClause::with_capacity(clause.len());

    for literal in clause.iter() {
        match kept.iter().find(|other| other.atom() == literal.atom()) {
            Some(other) if other.polarity() != literal.polarity() => {
                return PreprocessingOk::Tautology;
            }
            Some(_) => {}
            None => kept.push(*literal),
        }
    }

    *clause = kept;
    PreprocessingOk::Clause
}

#[cfg(test)]
mod preprocessing_tests {
    use crate::structures::literal::CLiteral;

    use super::*;

    #[test]
    fn duplicates() {
        let p = CLiteral::new(1, true);
        let not_q = CLiteral::new(2, false);
        let r = CLiteral::new(3, true);

        let mut clause = vec![p, not_q, p, r, not_q];
        assert_eq!(preprocess_clause(&mut clause), PreprocessingOk::Clause);
        assert_eq!(clause, vec![p, not_q, r]);
    }

    #[test]
    fn tautology() {
        let p = CLiteral::new(1, true);
        let q = CLiteral::new(2, true);

        let mut clause = vec![p, q, -p];
        assert_eq!(preprocess_clause(&mut clause), PreprocessingOk::Tautology);
    }
}
