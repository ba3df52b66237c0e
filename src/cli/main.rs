#![allow(clippy::collapsible_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use tern_sat::{
    context::Context,
    procedures::solve::StepOk,
    reports::{solution_lines, Report, ERROR_LINE},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

mod parse_args;
mod read;

use parse_args::CliOptions;

const EXIT_SATISFIABLE: i32 = 10;
const EXIT_UNSATISFIABLE: i32 = 20;
const EXIT_UNKNOWN: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse_args::cli().get_matches();

    let cli_options = CliOptions::from_args(&matches);

    let config = match parse_args::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            println!("{ERROR_LINE}");
            std::process::exit(EXIT_ERROR);
        }
    };

    let mut the_context = Context::from_config(config);

    if let Err(e) = read::read_dimacs(cli_options.path.as_deref(), &mut the_context) {
        println!("c {e}");
        println!("{ERROR_LINE}");
        std::process::exit(EXIT_ERROR);
    }

    let result = match cli_options.debug {
        true => debug_solve(&mut the_context),
        false => the_context.solve(),
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e:?}");
            println!("{ERROR_LINE}");
            std::process::exit(EXIT_ERROR);
        }
    };

    if cli_options.stats {
        write_stats(&the_context);
    }

    let model = match cli_options.model {
        true => the_context.model(),
        false => None,
    };
    print!("{}", solution_lines(report, model.as_deref()));

    match report {
        Report::Satisfiable => std::process::exit(EXIT_SATISFIABLE),

        Report::Unsatisfiable => std::process::exit(EXIT_UNSATISFIABLE),

        Report::Unknown => std::process::exit(EXIT_UNKNOWN),
    }
}

/// Solves by stepping through the context, writing each step as a comment.
///
/// Limits from the configuration are not applied.
fn debug_solve(context: &mut Context) -> Result<Report, err::ErrorKind> {
    loop {
        let level = context.level();
        match context.step()? {
            StepOk::Decided(literal) => println!("c Decision: {literal} (level {})", context.level()),

            StepOk::Propagated => {
                if let Some(&atom) = context.trail.assignments().last() {
                    if let Some(value) = context.value_of(atom) {
                        println!("c Propagation: {} (level {level})", CLiteral::new(atom, value));
                    }
                }
            }

            StepOk::Learnt(key) => {
                let clause = context.clause_db.get(&key)?;
                println!("c Learnt clause: {}", clause.as_dimacs(true));
                println!("c Backjump from level {level} to level {}", context.level());
            }

            StepOk::Satisfiable | StepOk::Unsatisfiable => return Ok(context.report()),
        }
    }
}

fn write_stats(context: &Context) {
    println!("c Atoms:        {}", context.atom_db.count());
    println!("c Clauses:      {}", context.clause_db.original_count());
    println!("c Learnt:       {}", context.clause_db.learnt_count());
    println!("c Decisions:    {}", context.counters.total_decisions);
    println!("c Propagations: {}", context.counters.total_propagations);
    println!("c Conflicts:    {}", context.counters.total_conflicts);
    println!("c Iterations:   {}", context.counters.total_iterations);
    println!("c Time:         {:.2?}", context.counters.time);
}
