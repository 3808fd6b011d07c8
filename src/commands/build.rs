//! Implementation of the `po4a-build build` command.

use crate::cli::BuildArgs;
use po4a_build::config::ConfigModel;
use po4a_build::error::Result;
use po4a_build::invoker::{Invoker, SystemRunner};
use std::time::Duration;

/// Execute the `po4a-build build` command.
///
/// Loads the project, runs po4a, and echoes its output on success.
/// Failures carry po4a's output in the error.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
    let model = ConfigModel::load(&args.project)?;

    let mut runner = SystemRunner::new();
    if let Some(seconds) = args.timeout {
        runner = runner.with_timeout(Duration::from_secs(seconds));
    }

    let report = Invoker::new(runner).build(&model)?;

    if !report.output.is_empty() {
        println!("{}", report.output);
    }
    println!(
        "Build succeeded in {:.1}s ({} file(s), {} language(s))",
        report.duration.as_secs_f64(),
        model.files().len(),
        model.target_languages().len()
    );

    Ok(())
}
