//! CLI argument parsing for po4a-build.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// po4a-build: generate po4a configuration files and run po4a.
///
/// A YAML project file describes the documents to translate, the languages,
/// and the build options. po4a-build turns it into po4a's configuration
/// syntax and drives the po4a executable.
#[derive(Parser, Debug)]
#[command(name = "po4a-build")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse arguments from the process environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for po4a-build.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the po4a configuration for a project file.
    ///
    /// Prints to stdout unless --output is given.
    Render(RenderArgs),

    /// Run po4a for a project file.
    ///
    /// Uses the project's configFile if set, otherwise a rendered
    /// temporary configuration.
    Build(BuildArgs),

    /// Check that the po4a executable can be found.
    Check(CheckArgs),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the YAML project file.
    pub project: PathBuf,

    /// Write the configuration to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Path to the YAML project file.
    pub project: PathBuf,

    /// Kill po4a after this many seconds.
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// po4a command to look up.
    #[arg(long, default_value = "po4a")]
    pub binary: String,
}
