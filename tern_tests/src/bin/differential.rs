//! Compares the solver with a reference solver on random formulas of growing size.
//!
//! Each formula is given to the solver in DIMACS form, and the verdict of the solver is compared with the verdict of the reference solver.
//! A satisfiable verdict from the solver is also checked against the model written.
//!
//! For each disagreement the formula, and the output of either solver, are written to the output directory.

use std::{
    path::{Path, PathBuf},
    thread,
};

use clap::{value_parser, Arg, ArgMatches, Command};
use rand::SeedableRng;

use tern_tests::{
    differential::{run_trials, Outcome},
    minimal_pcg::MinimalPCG32,
    random::{random_formula, Schedule},
    verdict,
};

fn cli() -> Command {
    Command::new("differential")
        .about("Compares the solver with a reference solver on random formulas")

        .arg(Arg::new("max_atoms")
            .long("max-atoms")
            .value_parser(value_parser!(usize))
            .default_value("100")
            .help("The count of atoms after which the schedule may end."))

        .arg(Arg::new("max_clauses")
            .long("max-clauses")
            .value_parser(value_parser!(usize))
            .default_value("600")
            .help("The count of clauses after which the schedule may end."))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .default_value("0")
            .help("The seed used to generate formulas."))

        .arg(Arg::new("workers")
            .long("workers")
            .value_parser(value_parser!(usize))
            .required(false)
            .help("The count of worker threads. Defaults to the available parallelism."))

        .arg(Arg::new("output")
            .long("output")
            .value_parser(value_parser!(PathBuf))
            .default_value("WRONG")
            .help("The directory to write disagreements to."))
}

struct Options {
    max_atoms: usize,
    max_clauses: usize,
    seed: u64,
    workers: usize,
    output: PathBuf,
}

impl Options {
    fn from_args(args: &ArgMatches) -> Self {
        let workers = match args.get_one::<usize>("workers") {
            Some(count) => (*count).max(1),
            None => thread::available_parallelism().map_or(1, |count| count.get()),
        };

        Options {
            max_atoms: args.get_one::<usize>("max_atoms").copied().unwrap_or(100),
            max_clauses: args.get_one::<usize>("max_clauses").copied().unwrap_or(600),
            seed: args.get_one::<u64>("seed").copied().unwrap_or_default(),
            workers,
            output: args
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("WRONG")),
        }
    }
}

fn write_case(dir: &Path, case: usize, outcome: &Outcome) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join(format!("case_{case}_input.cnf")), outcome.formula.as_dimacs())?;
    std::fs::write(dir.join(format!("case_{case}_output_solver.txt")), &outcome.solver)?;
    std::fs::write(dir.join(format!("case_{case}_output_reference.txt")), &outcome.reference)?;
    Ok(())
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let options = Options::from_args(&cli().get_matches());

    let mut rng = MinimalPCG32::from_seed(options.seed.to_le_bytes());
    let trials = Schedule::new(1, options.max_atoms, options.max_clauses).map(move |trial| {
        let formula = random_formula(&mut rng, trial.atoms, trial.clauses);
        (trial, formula)
    });

    let outcomes = match run_trials(options.workers, trials) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    println!("{:>9} {:>6} {:>8} {:>16} {:>16}", "iteration", "atoms", "clauses", "solver", "reference");

    let mut satisfiable = 0;
    let mut unsatisfiable = 0;
    let mut disagreements = 0;

    for outcome in &outcomes {
        let solver_verdict = verdict(&outcome.solver).unwrap_or("s MISSING");
        let reference_verdict = verdict(&outcome.reference).unwrap_or("s MISSING");

        match reference_verdict {
            "s SATISFIABLE" => satisfiable += 1,
            _ => unsatisfiable += 1,
        }

        let agrees = outcome.agrees();
        println!(
            "{:>9} {:>6} {:>8} {:>16} {:>16}{}",
            outcome.trial.iteration,
            outcome.trial.atoms,
            outcome.trial.clauses,
            solver_verdict.trim_start_matches("s "),
            reference_verdict.trim_start_matches("s "),
            if agrees { "" } else { "  WRONG" }
        );

        if !agrees {
            disagreements += 1;

            #[cfg(feature = "log")]
            log::warn!("Disagreement on iteration {}", outcome.trial.iteration);

            if let Err(e) = write_case(&options.output, disagreements, outcome) {
                println!("Failed to write case {disagreements}: {e}");
            }
        }
    }

    println!();
    println!("Formulas:      {}", outcomes.len());
    println!("Satisfiable:   {satisfiable}");
    println!("Unsatisfiable: {unsatisfiable}");
    println!("Disagreements: {disagreements}");

    if disagreements > 0 {
        println!("Cases written to {:?}", options.output);
        std::process::exit(1);
    }
}
