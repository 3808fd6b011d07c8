//! Command implementations for po4a-build.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod build;
mod check;
mod render;

use crate::cli::Command;
use po4a_build::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Build(args) => build::cmd_build(args),
        Command::Check(args) => check::cmd_check(args),
    }
}
