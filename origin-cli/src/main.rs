//! Main entry point for the origin CLI.
//!
//! `origin [-v] <command>` prints how the user's interactive shell would
//! resolve `<command>` and exits 0 if it resolves, 1 if nothing matches and
//! 2 on a usage error.

mod cli;
mod commands;
mod error;
mod utils;

use clap::error::ErrorKind;
use clap::Parser;
use cli::{Cli, USAGE};
use origin::output::EXIT_USAGE;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            eprintln!("origin: Usage: {USAGE}");
            std::process::exit(EXIT_USAGE);
        }
    };

    // Initialize logging based on verbosity
    let logger = origin::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        logger.warn(&format!("cannot install logger: {e}"));
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    match cli.command.execute(&global) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("origin: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
