use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use tern_sat::config::Config;

pub fn cli() -> Command {
    Command::new("tern_sat")
        .about("Determines whether a formula is satisfiable or unsatisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to parse. If no file is given, the formula is read from stdin."))

        .arg(Arg::new("no_model")
            .long("no-model")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Do not write a model on finding a formula is satisfiable."))

        .arg(Arg::new("stats")
            .long("stats")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Write counts of decisions, propagations, conflicts, etc. after a solve."))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The time limit of a solve, in seconds.")
            .long_help("The time limit of a solve, in seconds.
Default: No limit

If the limit is exceeded the solve ends with an unknown result."))

        .arg(Arg::new("conflict_limit")
            .long("conflict-limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The conflict limit of a solve.")
            .long_help("The conflict limit of a solve.
Default: No limit

If the limit is reached the solve ends with an unknown result."))

        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Write each step of a solve as a comment."))
}

/// Options of the cli which are not part of the configuration of a context.
#[derive(Clone, Debug, Default)]
pub struct CliOptions {
    pub path: Option<PathBuf>,
    pub model: bool,
    pub stats: bool,
    pub debug: bool,
}

impl CliOptions {
    pub fn from_args(args: &ArgMatches) -> Self {
        CliOptions {
            path: args.get_one::<PathBuf>("path").cloned(),
            model: !args.get_flag("no_model"),
            stats: args.get_flag("stats"),
            debug: args.get_flag("debug"),
        }
    }
}

/// A configuration from the arguments, or a message describing an out of bounds argument.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, String> {
    let mut the_config = Config::default();

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        let limit = std::time::Duration::from_secs(*secs);
        if let Err(e) = the_config.time_limit.set(limit) {
            return Err(format!("{e:?}"));
        }
    };

    if let Ok(Some(count)) = args.try_get_one::<usize>("conflict_limit") {
        if let Err(e) = the_config.conflict_limit.set(*count) {
            return Err(format!("{e:?}"));
        }
    };

    Ok(the_config)
}
