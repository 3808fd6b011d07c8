//! Exit code constants for the po4a-build CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing file parameters, refused overwrite)
//! - 2: Build failure (po4a exited non-zero or timed out)
//! - 3: po4a executable not found

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid project file, or refused overwrite.
pub const USER_ERROR: i32 = 1;

/// Build failure: po4a returned a non-zero status or was killed on timeout.
pub const BUILD_FAILURE: i32 = 2;

/// The po4a executable could not be located.
pub const TOOL_MISSING: i32 = 3;
