//! Error types for po4a-build.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for po4a-build operations.
///
/// Model mutation can only fail with `MissingParameter`; every other variant
/// originates at the process-invocation boundary or in file I/O.
#[derive(Error, Debug)]
pub enum Po4aError {
    /// A file descriptor omitted one of `masterFile`, `fileType`, `targetFile`.
    #[error("Required parameter {field} not found")]
    MissingParameter { field: String },

    /// The po4a executable could not be located.
    #[error(
        "Could not find {name} executable, please make sure it is installed and in PATH"
    )]
    ExecutableNotFound { name: String },

    /// po4a ran but exited with a non-zero status.
    #[error("Build failed (exit code {}): {}", exit_code_label(.exit_code), .output)]
    BuildFailed {
        exit_code: Option<i32>,
        output: String,
    },

    /// po4a did not finish within the configured timeout.
    #[error("Build timed out after {seconds}s")]
    BuildTimedOut { seconds: u64 },

    /// Refused to overwrite an existing configuration file.
    #[error("Target file exists: {}", .path.display())]
    ConfigFileExists { path: PathBuf },

    /// Bad input or an I/O problem outside the build itself.
    #[error("{0}")]
    UserError(String),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

impl Po4aError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Po4aError::MissingParameter { .. } => exit_codes::USER_ERROR,
            Po4aError::ConfigFileExists { .. } => exit_codes::USER_ERROR,
            Po4aError::UserError(_) => exit_codes::USER_ERROR,
            Po4aError::BuildFailed { .. } => exit_codes::BUILD_FAILURE,
            Po4aError::BuildTimedOut { .. } => exit_codes::BUILD_FAILURE,
            Po4aError::ExecutableNotFound { .. } => exit_codes::TOOL_MISSING,
        }
    }
}

/// Result type alias for po4a-build operations.
pub type Result<T> = std::result::Result<T, Po4aError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_has_correct_exit_code() {
        let err = Po4aError::MissingParameter {
            field: "fileType".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_file_exists_has_correct_exit_code() {
        let err = Po4aError::ConfigFileExists {
            path: PathBuf::from("po4a.cfg"),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn build_errors_have_correct_exit_code() {
        let err = Po4aError::BuildFailed {
            exit_code: Some(1),
            output: "boom".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::BUILD_FAILURE);

        let err = Po4aError::BuildTimedOut { seconds: 5 };
        assert_eq!(err.exit_code(), exit_codes::BUILD_FAILURE);
    }

    #[test]
    fn executable_not_found_has_correct_exit_code() {
        let err = Po4aError::ExecutableNotFound {
            name: "po4a".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::TOOL_MISSING);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = Po4aError::MissingParameter {
            field: "fileType".to_string(),
        };
        assert_eq!(err.to_string(), "Required parameter fileType not found");

        let err = Po4aError::BuildFailed {
            exit_code: Some(2),
            output: "po4a: unknown format".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Build failed (exit code 2): po4a: unknown format"
        );

        let err = Po4aError::BuildFailed {
            exit_code: None,
            output: String::new(),
        };
        assert!(err.to_string().contains("exit code none"));

        let err = Po4aError::ConfigFileExists {
            path: PathBuf::from("po4a.cfg"),
        };
        assert_eq!(err.to_string(), "Target file exists: po4a.cfg");
    }
}
