//! Atomic file writes for generated po4a configuration.
//!
//! Content is written to a temporary file in the target's directory, synced,
//! and then persisted over the target. A reader (po4a, or a concurrent
//! build) never observes a half-written configuration.
//!
//! Source and destination must be on the same filesystem for the final
//! rename to be atomic; creating the temporary file next to the target
//! guarantees that.

use crate::error::{Po4aError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write bytes to a file.
///
/// Missing parent directories are created.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The bytes to write
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(Po4aError::UserError)` - On write or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp = stage(path, content)?;

    // The temporary file is removed on drop if persisting fails.
    temp.persist(path).map_err(|e| {
        Po4aError::UserError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e.error
        ))
    })?;

    Ok(())
}

/// Atomically create a file, refusing to replace an existing one.
///
/// The existence check and the final rename are a single filesystem
/// operation, so a file created concurrently is never clobbered.
///
/// # Returns
///
/// * `Ok(())` - The file was created
/// * `Err(Po4aError::ConfigFileExists)` - `path` already exists
/// * `Err(Po4aError::UserError)` - On write or rename failure
pub fn atomic_write_new<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp = stage(path, content)?;

    temp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == io::ErrorKind::AlreadyExists {
            Po4aError::ConfigFileExists {
                path: path.to_path_buf(),
            }
        } else {
            Po4aError::UserError(format!(
                "failed to atomically create '{}': {}",
                path.display(),
                e.error
            ))
        }
    })?;

    Ok(())
}

/// Write `content` to a synced temporary file next to `path`.
fn stage(path: &Path, content: &[u8]) -> Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| {
            Po4aError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| {
        Po4aError::UserError(format!(
            "failed to create temporary file in '{}': {}",
            parent.display(),
            e
        ))
    })?;

    temp.write_all(content)
        .map_err(|e| Po4aError::UserError(format!("failed to write to temporary file: {}", e)))?;

    temp.as_file().sync_all().map_err(|e| {
        Po4aError::UserError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(temp)
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}
