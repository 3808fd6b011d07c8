//! Running po4a for a configuration model.

use super::runner::{ProcessRunner, SystemRunner};
use crate::config::ConfigModel;
use crate::error::{Po4aError, Result};
use crate::fs::{atomic_write_file, atomic_write_new};
use crate::render::render;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempPath;

/// Result of a successful po4a run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// The command line that was executed (for logging).
    pub command: String,
    /// Configuration file passed to po4a, if it outlives the build.
    ///
    /// `None` when a temporary rendered configuration was used.
    pub config_file: Option<PathBuf>,
    /// Combined stdout and stderr of po4a.
    pub output: String,
    /// Duration of execution.
    pub duration: Duration,
}

/// Locates po4a and runs it for a model.
#[derive(Debug, Clone, Default)]
pub struct Invoker<R = SystemRunner> {
    runner: R,
}

impl<R: ProcessRunner> Invoker<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve the po4a executable named by the model.
    pub fn locate(&self, model: &ConfigModel) -> Result<PathBuf> {
        let (program, _) = split_binary(model.binary_name())?;
        self.runner.locate_executable(&program)
    }

    /// Build the translations described by `model`.
    ///
    /// Uses the model's existing configuration file when one is set;
    /// otherwise the model is rendered into a temporary file that is removed
    /// once po4a exits. Base directories are passed as the `srcdir` and
    /// `destdir` po4a variables.
    ///
    /// # Errors
    ///
    /// * `ExecutableNotFound` - po4a is not installed
    /// * `BuildFailed` - po4a exited with a non-zero status
    /// * `BuildTimedOut` - the runner killed po4a on timeout
    pub fn build(&self, model: &ConfigModel) -> Result<BuildReport> {
        let (program_name, extra_args) = split_binary(model.binary_name())?;
        let program = self.runner.locate_executable(&program_name)?;

        // The temporary file is deleted when `rendered` is dropped.
        let (config_path, rendered) = match model.config_file() {
            Some(path) => (path.to_path_buf(), None),
            None => {
                let temp = write_temp_config(model)?;
                (temp.to_path_buf(), Some(temp))
            }
        };

        let args = build_args(
            extra_args,
            model.source_base_dir(),
            model.destination_base_dir(),
            &config_path,
        );
        let command = format_command(&program, &args);

        tracing::info!(
            command = %command,
            split_mode = model.is_split_mode(),
            files = model.files().len(),
            "running po4a"
        );

        let result = self.runner.run_process(&program, &args)?;
        drop(rendered);

        tracing::debug!(
            exit_code = ?result.exit_code,
            timed_out = result.timed_out,
            duration_ms = result.duration.as_millis() as u64,
            "po4a finished"
        );

        if result.timed_out {
            return Err(Po4aError::BuildTimedOut {
                seconds: whole_seconds(result.duration),
            });
        }

        if !result.is_success() {
            tracing::warn!(exit_code = ?result.exit_code, "po4a build failed");
            return Err(Po4aError::BuildFailed {
                exit_code: result.exit_code,
                output: result.output,
            });
        }

        Ok(BuildReport {
            command,
            config_file: model.config_file().map(Path::to_path_buf),
            output: result.output,
            duration: result.duration,
        })
    }
}

/// Write the rendered configuration of `model` to `path`.
///
/// Fails with `ConfigFileExists` if `path` exists and `overwrite` is false.
pub fn write_config<P: AsRef<Path>>(
    model: &ConfigModel,
    path: P,
    overwrite: bool,
) -> Result<()> {
    let path = path.as_ref();

    let content = render(model);
    if overwrite {
        atomic_write_file(path, &content)?;
    } else {
        atomic_write_new(path, content.as_bytes())?;
    }
    tracing::debug!(path = %path.display(), "wrote po4a configuration");
    Ok(())
}

/// Split the configured po4a command into program and leading arguments.
fn split_binary(binary: &str) -> Result<(String, Vec<String>)> {
    let mut words = shell_words::split(binary).map_err(|e| {
        Po4aError::UserError(format!(
            "failed to parse po4a command '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            binary, e
        ))
    })?;

    if words.is_empty() {
        return Err(Po4aError::UserError(
            "po4a command is empty; set binaryName or leave it unset".to_string(),
        ));
    }

    let program = words.remove(0);
    Ok((program, words))
}

fn build_args(
    mut args: Vec<String>,
    source_base_dir: Option<&str>,
    destination_base_dir: Option<&str>,
    config_path: &Path,
) -> Vec<String> {
    args.push("--variable".to_string());
    args.push(format!("srcdir={}", source_base_dir.unwrap_or_default()));
    args.push("--variable".to_string());
    args.push(format!("destdir={}", destination_base_dir.unwrap_or_default()));
    args.push(config_path.to_string_lossy().into_owned());
    args
}

fn write_temp_config(model: &ConfigModel) -> Result<TempPath> {
    let mut temp = tempfile::Builder::new()
        .prefix("po4a")
        .suffix(".cfg")
        .tempfile()
        .map_err(|e| {
            Po4aError::UserError(format!("failed to create temporary config file: {}", e))
        })?;

    temp.write_all(render(model).as_bytes())
        .and_then(|()| temp.flush())
        .map_err(|e| {
            Po4aError::UserError(format!(
                "failed to write temporary config file '{}': {}",
                temp.path().display(),
                e
            ))
        })?;

    // Close the handle so po4a can open the file on every platform.
    Ok(temp.into_temp_path())
}

/// Seconds in `duration`, rounded up so a sub-second run never reports 0.
fn whole_seconds(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}

fn format_command(program: &Path, args: &[String]) -> String {
    let program = program.to_string_lossy();
    std::iter::once(program.as_ref())
        .chain(args.iter().map(String::as_str))
        .map(|word| shell_words::quote(word).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
