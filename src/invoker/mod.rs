//! po4a process invocation.
//!
//! This module provides:
//!
//! - `ProcessRunner`, the injected capability for executable lookup and
//!   subprocess execution (`SystemRunner` is the real one)
//! - `Invoker`, which renders or reuses a configuration file and runs po4a
//!   with the base directories bound as `srcdir`/`destdir` variables
//! - `write_config`, which persists a rendered configuration

mod build;
mod runner;


pub use build::{BuildReport, Invoker, write_config};
pub use runner::{ProcessOutput, ProcessRunner, SystemRunner};
