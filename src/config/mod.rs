//! Configuration model for po4a builds.
//!
//! This module defines `ConfigModel`, the declarative state of one build
//! (languages, documents, build options and flags, translation file patterns,
//! base directories), and `ModelOptions`, the typed project-file shape it can
//! be constructed from. Project files are YAML; unknown fields are ignored.

mod model;
mod operations;
mod options;
pub mod types;


// Re-export public API
pub use model::{ConfigModel, DEFAULT_BINARY_NAME};
pub use options::ModelOptions;
pub use types::{BuildFlag, BuildOption, FileEntry, FileSpec};
