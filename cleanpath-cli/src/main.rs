//! Main entry point for the cleanpath CLI.
//!
//! Each path given on the command line, and each line of stdin with
//! `--stdin`, is cleaned and optionally transformed, then printed on its own
//! line.

use std::io;
use std::process;

use clap::{CommandFactory, Parser};
use cleanpath::config::OptionsValidator;
use cleanpath::{Config, Logger, OsContext};
use cleanpath_cli::error::CliError;
use cleanpath_cli::runner::process_paths;
use cleanpath_cli::Cli;

fn main() {
    // Argument errors exit with 1 like configuration errors; help and
    // version output keep clap's handling.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let logger = cleanpath::init_logger(cli.verbose, cli.quiet);

    match execute(&cli, &logger) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            if e.shows_usage() {
                eprintln!("{}", Cli::command().render_usage());
            }
            process::exit(e.exit_code());
        }
    }
}

fn execute(cli: &Cli, logger: &Logger) -> Result<(), CliError> {
    let options = cli.to_options();
    let config = Config::resolve(&options, &OsContext)?;
    for (option, requires) in OptionsValidator::ineffective(&options) {
        logger.warn(&format!("option {option} has no effect without {requires}"));
    }

    let stdin = io::stdin();
    let input = cli.stdin.then(|| stdin.lock());
    let mut out = io::stdout().lock();

    let count = process_paths(&config, &OsContext, &cli.path_strings(), input, &mut out, |entry| {
        logger.trace(entry);
    })?;
    logger.info(&format!("processed {count} path(s)"));
    Ok(())
}
