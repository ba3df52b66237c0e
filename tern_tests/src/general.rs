use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use tern_sat::{
    config::Config,
    context::Context,
    reports::{solution_lines, Report, ERROR_LINE},
    types::err,
};

pub fn load_dimacs(context: &mut Context, path: &Path) -> Result<(), err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    context.read_dimacs(BufReader::new(&file))?;
    Ok(())
}

/// The directory of fixture formulas bundled with the crate.
pub fn cnf_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("cnf")
}

/// Paths to each file in `dir` with extension `cnf`.
pub fn cnf_files(dir: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::default();

    if let Some(dir) = dir.to_str() {
        for entry in glob::glob(format!("{dir}/*.cnf").as_str()).expect("bad glob") {
            paths.push(entry.unwrap());
        }
    }

    paths
}

pub fn silent_formula_report(path: &Path, config: &Config) -> Report {
    let mut ctx = Context::from_config(config.clone());
    match load_dimacs(&mut ctx, path) {
        Ok(()) => {}
        Err(e) => panic!("c Error loading {path:?}: {e:?}"),
    };

    match ctx.solve() {
        Ok(report) => report,
        Err(e) => panic!("{e:?}"),
    }
}

/// Output of the engine on `dimacs`, as the command line interface would write it.
///
/// An `s` line, and for a satisfiable formula a `v` line with the model.
pub fn engine_output(dimacs: &str, config: &Config) -> String {
    let mut ctx = Context::from_config(config.clone());

    if ctx.read_dimacs(dimacs.as_bytes()).is_err() {
        return format!("{ERROR_LINE}\n");
    }

    match ctx.solve() {
        Ok(report) => solution_lines(report, ctx.model().as_deref()),
        Err(_) => format!("{ERROR_LINE}\n"),
    }
}

/// The verdict line of some output, if present.
pub fn verdict(output: &str) -> Option<&str> {
    output.lines().find(|line| line.starts_with("s "))
}

#[cfg(test)]
mod general_tests {
    use super::*;

    #[test]
    fn engine_lines() {
        let output = engine_output("p cnf 2 1\n-1 0\n", &Config::default());
        assert_eq!(output, "s SATISFIABLE\nv -1 2 0\n");

        let output = engine_output("p cnf 1 2\n1 0\n-1 0\n", &Config::default());
        assert_eq!(output, "s UNSATISFIABLE\n");
        assert_eq!(verdict(&output), Some("s UNSATISFIABLE"));

        let output = engine_output("p cnf 1 1\n0\n", &Config::default());
        assert_eq!(output, "s ERROR\n");
    }
}
