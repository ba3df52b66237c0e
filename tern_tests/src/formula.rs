use tern_sat::structures::{clause::CClause, literal::CLiteral};

/// A formula as a count of atoms and a list of clauses, independent of any context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    pub atoms: usize,
    pub clauses: Vec<CClause>,
}

impl Formula {
    /// The formula in DIMACS form, with a problem specification.
    pub fn as_dimacs(&self) -> String {
        let mut dimacs = format!("p cnf {} {}\n", self.atoms, self.clauses.len());
        for clause in &self.clauses {
            for literal in clause {
                dimacs.push_str(format!("{literal} ").as_str());
            }
            dimacs.push_str("0\n");
        }
        dimacs
    }

    /// Whether each clause of the formula contains some literal of `model`.
    pub fn satisfied_by(&self, model: &[CLiteral]) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.iter().any(|literal| model.contains(literal)))
    }
}

#[cfg(test)]
mod formula_tests {
    use super::*;

    #[test]
    fn dimacs() {
        let formula = Formula {
            atoms: 3,
            clauses: vec![vec![1, -2], vec![3]],
        };

        assert_eq!(formula.as_dimacs(), "p cnf 3 2\n1 -2 0\n3 0\n");
    }

    #[test]
    fn satisfaction() {
        let formula = Formula {
            atoms: 2,
            clauses: vec![vec![1, 2], vec![-1, -2]],
        };

        assert!(formula.satisfied_by(&[1, -2]));
        assert!(!formula.satisfied_by(&[1, 2]));
    }
}
