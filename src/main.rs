//! po4a-build: generate po4a configuration files and run po4a.
//!
//! This is the main entry point for the `po4a-build` CLI. It parses
//! arguments, installs the log subscriber, dispatches to the appropriate
//! command handler, and handles errors with proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use po4a_build::{exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
