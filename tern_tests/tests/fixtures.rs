use tern_sat::{config::Config, reports::Report};
use tern_tests::{cnf_dir, cnf_files, silent_formula_report};

#[test]
fn bundled_formulas() {
    let mut satisfiable = 0;
    let mut unsatisfiable = 0;

    for formula_path in cnf_files(&cnf_dir()) {
        let Some(formula_name) = formula_path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        if formula_name.contains("unsat") {
            assert_eq!(
                Report::Unsatisfiable,
                silent_formula_report(&formula_path, &Config::default()),
                "{formula_name}"
            );
            unsatisfiable += 1;
        } else if formula_name.contains("sat") {
            assert_eq!(
                Report::Satisfiable,
                silent_formula_report(&formula_path, &Config::default()),
                "{formula_name}"
            );
            satisfiable += 1;
        }
    }

    assert_eq!(satisfiable, 4);
    assert_eq!(unsatisfiable, 4);
}

mod limits {
    use super::*;

    #[test]
    fn conflict_limit() {
        let mut config = Config::default();
        assert!(config.conflict_limit.set(1).is_ok());

        let report = silent_formula_report(&cnf_dir().join("php_3_2_unsat.cnf"), &config);
        assert_ne!(report, Report::Satisfiable);
    }
}
