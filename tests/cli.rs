use std::{
    io::Write,
    path::Path,
    process::{Command, Stdio},
};

/// Runs the cli with `args`, writing `input` to stdin.
///
/// Returns the lines written which are not comments, together with the exit code.
fn run_cli(args: &[&str], input: &[u8]) -> (Vec<String>, Option<i32>) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tern_cli"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to start tern_cli");

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input).expect("failed to write to stdin");
    }

    let output = child.wait_with_output().expect("failed to wait on tern_cli");
    let lines = String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.starts_with('c'))
        .map(|line| line.to_string())
        .collect();

    (lines, output.status.code())
}

mod solutions {
    use super::*;

    #[test]
    fn single_unit() {
        let (lines, code) = run_cli(&[], b"p cnf 1 1\n1 0\n");

        assert_eq!(lines, vec!["s SATISFIABLE", "v 1 0"]);
        assert_eq!(code, Some(10));
    }

    #[test]
    fn contradictory_units() {
        let (lines, code) = run_cli(&[], b"p cnf 1 2\n1 0\n-1 0\n");

        assert_eq!(lines, vec!["s UNSATISFIABLE"]);
        assert_eq!(code, Some(20));
    }

    #[test]
    fn empty_clause() {
        let (lines, code) = run_cli(&[], b"p cnf 1 2\n1 0\n0\n");

        assert_eq!(lines, vec!["s ERROR"]);
        assert_eq!(code, Some(1));
    }

    #[test]
    fn all_binary_clauses() {
        let (lines, code) = run_cli(&[], b"p cnf 2 4\n1 2 0\n-1 2 0\n1 -2 0\n-1 -2 0\n");

        assert_eq!(lines, vec!["s UNSATISFIABLE"]);
        assert_eq!(code, Some(20));
    }

    #[test]
    fn no_model() {
        let (lines, code) = run_cli(&["--no-model"], b"p cnf 2 1\n-1 0\n");

        assert_eq!(lines, vec!["s SATISFIABLE"]);
        assert_eq!(code, Some(10));
    }
}

mod options {
    use super::*;

    #[test]
    fn conflict_limit() {
        let mut dimacs = String::from("p cnf 3 8\n");
        for clause in [
            "1 2 3", "1 2 -3", "1 -2 3", "1 -2 -3", "-1 2 3", "-1 2 -3", "-1 -2 3", "-1 -2 -3",
        ] {
            dimacs.push_str(format!("{clause} 0\n").as_str());
        }

        let (lines, code) = run_cli(&["--conflict-limit", "1"], dimacs.as_bytes());
        assert_eq!(lines, vec!["s UNKNOWN"]);
        assert_eq!(code, Some(0));

        let (lines, code) = run_cli(&[], dimacs.as_bytes());
        assert_eq!(lines, vec!["s UNSATISFIABLE"]);
        assert_eq!(code, Some(20));
    }

    #[test]
    fn path() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tern_tests")
            .join("cnf")
            .join("php_3_2_unsat.cnf");

        let (lines, code) = run_cli(&[path.to_str().unwrap(), "--stats"], b"");
        assert_eq!(lines, vec!["s UNSATISFIABLE"]);
        assert_eq!(code, Some(20));
    }

    #[test]
    fn missing_path() {
        let (lines, code) = run_cli(&["no_such_formula.cnf"], b"");

        assert_eq!(lines, vec!["s ERROR"]);
        assert_eq!(code, Some(1));
    }
}
