//! po4a-build: generate po4a configuration files and drive the po4a tool.
//!
//! A [`config::ConfigModel`] describes the documents to translate, the
//! languages involved, and the build options. [`render::render`] turns it
//! into po4a's configuration syntax, and [`invoker::Invoker`] runs the po4a
//! executable against that configuration.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod invoker;
pub mod logging;
pub mod placeholder;
pub mod render;
