//! Process capability used by the invoker.
//!
//! `ProcessRunner` is the seam between po4a-build and the operating system:
//! executable lookup and subprocess execution. `SystemRunner` is the real
//! implementation; tests substitute their own.

use crate::error::{Po4aError, Result};
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Outcome of a finished (or killed) process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code of the process (None if killed or terminated by a signal).
    pub exit_code: Option<i32>,
    /// Captured stdout followed by captured stderr.
    pub output: String,
    /// Whether the process was killed due to timeout.
    pub timed_out: bool,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl ProcessOutput {
    /// Check if the process exited cleanly with status 0.
    pub fn is_success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Executable lookup and process execution.
pub trait ProcessRunner {
    /// Resolve an executable name to a path.
    ///
    /// Returns `Po4aError::ExecutableNotFound` if it cannot be found.
    fn locate_executable(&self, name: &str) -> Result<PathBuf>;

    /// Run a program to completion and capture its output.
    ///
    /// A non-zero exit status is not an error at this level.
    fn run_process(&self, program: &Path, args: &[String]) -> Result<ProcessOutput>;
}

/// Runs real processes, searching `PATH` for executables.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
    search_path: Option<OsString>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill the process if it runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Search these directories instead of the `PATH` environment variable.
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    fn search_path(&self) -> Option<OsString> {
        self.search_path
            .clone()
            .or_else(|| std::env::var_os("PATH"))
    }
}

impl ProcessRunner for SystemRunner {
    fn locate_executable(&self, name: &str) -> Result<PathBuf> {
        let not_found = || Po4aError::ExecutableNotFound {
            name: name.to_string(),
        };

        if name.is_empty() {
            return Err(not_found());
        }

        // A name with a directory component is used as-is.
        let candidate = Path::new(name);
        if candidate.components().count() > 1 {
            return if is_executable(candidate) {
                Ok(candidate.to_path_buf())
            } else {
                Err(not_found())
            };
        }

        let search_path = self.search_path().ok_or_else(not_found)?;
        for dir in std::env::split_paths(&search_path) {
            for file_name in executable_names(name) {
                let path = dir.join(&file_name);
                if is_executable(&path) {
                    return Ok(path);
                }
            }
        }

        Err(not_found())
    }

    fn run_process(&self, program: &Path, args: &[String]) -> Result<ProcessOutput> {
        // Output goes to files rather than pipes so a chatty process can
        // never block on a full pipe while we poll for the timeout.
        let capture_dir = tempfile::tempdir().map_err(|e| {
            Po4aError::UserError(format!("failed to create output capture directory: {}", e))
        })?;
        let stdout_path = capture_dir.path().join("stdout.log");
        let stderr_path = capture_dir.path().join("stderr.log");

        let stdout_file = create_log(&stdout_path)?;
        let stderr_file = create_log(&stderr_path)?;

        let start_time = Instant::now();
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout_file))
            .stderr(Stdio::from(stderr_file))
            .spawn()
            .map_err(|e| {
                Po4aError::UserError(format!(
                    "failed to execute '{}': {}\n\
                     Fix: ensure the command is installed and in PATH.",
                    program.display(),
                    e
                ))
            })?;

        let (exit_code, timed_out) = match self.timeout {
            Some(timeout) => wait_with_timeout(&mut child, timeout)?,
            None => {
                let status = child.wait().map_err(|e| {
                    Po4aError::UserError(format!("failed to wait for process: {}", e))
                })?;
                (status.code(), false)
            }
        };
        let duration = start_time.elapsed();

        let stdout = read_log(&stdout_path);
        let stderr = read_log(&stderr_path);

        Ok(ProcessOutput {
            exit_code,
            output: combine_output(stdout, &stderr),
            timed_out,
            duration,
        })
    }
}

fn create_log(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| {
        Po4aError::UserError(format!(
            "failed to create output log '{}': {}",
            path.display(),
            e
        ))
    })
}

fn read_log(path: &Path) -> String {
    std::fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

/// Join stdout and stderr, trimming trailing whitespace.
fn combine_output(mut stdout: String, stderr: &str) -> String {
    let stderr = stderr.trim_end();
    let trimmed_len = stdout.trim_end().len();
    stdout.truncate(trimmed_len);

    if !stderr.is_empty() {
        if !stdout.is_empty() {
            stdout.push('\n');
        }
        stdout.push_str(stderr);
    }
    stdout
}

/// Wait for a child process with timeout.
///
/// Returns (exit_code, timed_out).
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<(Option<i32>, bool)> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok((status.code(), false)),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    // SIGKILL on Unix, TerminateProcess on Windows.
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok((None, true));
                }
                std::thread::sleep(poll_interval);
            }
            Err(e) => {
                return Err(Po4aError::UserError(format!(
                    "failed to check process status: {}",
                    e
                )));
            }
        }
    }
}

fn executable_names(name: &str) -> Vec<OsString> {
    #[cfg(windows)]
    {
        if Path::new(name).extension().is_none() {
            return vec![OsString::from(format!("{}.exe", name)), OsString::from(name)];
        }
    }
    vec![OsString::from(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
