//! Filesystem utilities for po4a-build.
//!
//! Generated configuration files are written atomically so po4a never reads
//! a partially written file.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_new;
pub use atomic::atomic_write_file;
