//! Implementation of the `po4a-build check` command.

use crate::cli::CheckArgs;
use po4a_build::config::ConfigModel;
use po4a_build::error::Result;
use po4a_build::invoker::{Invoker, SystemRunner};

/// Execute the `po4a-build check` command.
///
/// Prints the resolved path of the po4a executable.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let mut model = ConfigModel::new();
    model.set_binary_name(args.binary);

    let path = Invoker::new(SystemRunner::new()).locate(&model)?;
    println!("po4a found: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use po4a_build::error::Po4aError;

    #[test]
    fn test_check_missing_binary() {
        let err = cmd_check(CheckArgs {
            binary: "nonexistent_po4a_xyz_123".to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, Po4aError::ExecutableNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_existing_binary() {
        cmd_check(CheckArgs {
            binary: "sh".to_string(),
        })
        .unwrap();
    }
}
