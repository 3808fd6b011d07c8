//! ConfigModel definition and mutation operations.

use super::types::{BuildFlag, BuildOption, FileEntry, FileSpec};
use crate::error::{Po4aError, Result};
use crate::placeholder;
use std::path::{Path, PathBuf};

/// Default name of the po4a executable.
pub const DEFAULT_BINARY_NAME: &str = "po4a";

/// Declarative state of one po4a build.
///
/// A model is built once per build request, mutated through the setters
/// below, and then handed to [`crate::render::render`] or
/// [`crate::invoker::Invoker`]. Ordered collections keep insertion order so
/// that rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigModel {
    source_language: Option<String>,
    target_languages: Vec<String>,
    files: Vec<FileEntry>,
    build_options: Vec<(BuildOption, String)>,
    build_flags: Vec<BuildFlag>,
    master_translation_file: String,
    translation_file: String,
    source_base_dir: Option<String>,
    destination_base_dir: Option<String>,
    config_file: Option<PathBuf>,
    binary_name: String,
}

impl Default for ConfigModel {
    fn default() -> Self {
        Self {
            source_language: None,
            target_languages: Vec::new(),
            files: Vec::new(),
            build_options: Vec::new(),
            build_flags: Vec::new(),
            master_translation_file: String::new(),
            translation_file: String::new(),
            source_base_dir: None,
            destination_base_dir: None,
            config_file: None,
            binary_name: DEFAULT_BINARY_NAME.to_string(),
        }
    }
}

impl ConfigModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Languages
    // =========================================================================

    /// Set the language of the master documents.
    pub fn set_source_language(&mut self, language: impl Into<String>) {
        self.source_language = Some(language.into());
    }

    pub fn source_language(&self) -> Option<&str> {
        self.source_language.as_deref()
    }

    /// Add a target language unless it is already present.
    pub fn add_target_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        if !self.target_languages.contains(&language) {
            self.target_languages.push(language);
        }
    }

    /// Replace the target languages, dropping duplicates (first one wins).
    pub fn set_target_languages<I, S>(&mut self, languages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_languages.clear();
        for language in languages {
            self.add_target_language(language);
        }
    }

    pub fn target_languages(&self) -> &[String] {
        &self.target_languages
    }

    // =========================================================================
    // Files
    // =========================================================================

    /// Register a document to translate.
    ///
    /// `target_file` may use the `%lang` placeholder. Re-adding a
    /// `master_file` that is already registered replaces that entry in place.
    ///
    /// Fails with `MissingParameter` if any field is empty, checked in the
    /// order `masterFile`, `fileType`, `targetFile`. The model is left
    /// unchanged in that case.
    pub fn add_file(
        &mut self,
        file_type: &str,
        master_file: &str,
        target_file: &str,
    ) -> Result<()> {
        let master_file = required(master_file, "masterFile")?;
        let file_type = required(file_type, "fileType")?;
        let target_file = required(target_file, "targetFile")?;

        let entry = FileEntry::new(
            file_type.to_string(),
            master_file.to_string(),
            placeholder::normalize(target_file),
        );

        match self
            .files
            .iter_mut()
            .find(|existing| existing.master_file() == entry.master_file())
        {
            Some(existing) => *existing = entry,
            None => self.files.push(entry),
        }
        Ok(())
    }

    /// Register several documents.
    ///
    /// Fails with `MissingParameter` on the first descriptor that lacks
    /// `masterFile`, `fileType` or `targetFile`. Descriptors before it stay
    /// registered.
    pub fn add_files(&mut self, files: &[FileSpec]) -> Result<()> {
        for spec in files {
            self.add_file(
                spec.file_type.as_deref().unwrap_or_default(),
                spec.master_file.as_deref().unwrap_or_default(),
                spec.target_file.as_deref().unwrap_or_default(),
            )?;
        }
        Ok(())
    }

    /// Replace all registered documents.
    pub fn set_files(&mut self, files: &[FileSpec]) -> Result<()> {
        self.files.clear();
        self.add_files(files)
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    // =========================================================================
    // Build options and flags
    // =========================================================================

    /// Set (or overwrite) a build option.
    pub fn set_build_option(&mut self, option: BuildOption, value: impl Into<String>) {
        let value = value.into();
        match self.build_options.iter_mut().find(|(opt, _)| *opt == option) {
            Some((_, existing)) => *existing = value,
            None => self.build_options.push((option, value)),
        }
    }

    /// Set a build option by its public name.
    ///
    /// Unknown names are ignored and `false` is returned.
    pub fn set_build_option_named(&mut self, name: &str, value: impl Into<String>) -> bool {
        match BuildOption::from_str(name) {
            Some(option) => {
                self.set_build_option(option, value);
                true
            }
            None => {
                tracing::debug!(option = name, "ignoring unknown build option");
                false
            }
        }
    }

    /// Apply several named build options.
    pub fn set_build_options<I, K, V>(&mut self, options: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in options {
            self.set_build_option_named(name.as_ref(), value);
        }
    }

    pub fn build_option(&self, option: BuildOption) -> Option<&str> {
        self.build_options
            .iter()
            .find(|(opt, _)| *opt == option)
            .map(|(_, value)| value.as_str())
    }

    pub fn build_options(&self) -> &[(BuildOption, String)] {
        &self.build_options
    }

    /// Enable a build flag.
    pub fn add_build_flag(&mut self, flag: BuildFlag) {
        if !self.build_flags.contains(&flag) {
            self.build_flags.push(flag);
        }
    }

    /// Disable a build flag.
    pub fn remove_build_flag(&mut self, flag: BuildFlag) {
        self.build_flags.retain(|existing| *existing != flag);
    }

    /// Enable a build flag by its public name.
    ///
    /// Unknown names are ignored and `false` is returned.
    pub fn set_build_flag_named(&mut self, name: &str) -> bool {
        match BuildFlag::from_str(name) {
            Some(flag) => {
                self.add_build_flag(flag);
                true
            }
            None => {
                tracing::debug!(flag = name, "ignoring unknown build flag");
                false
            }
        }
    }

    pub fn build_flags(&self) -> &[BuildFlag] {
        &self.build_flags
    }

    // =========================================================================
    // Translation file patterns
    // =========================================================================

    /// Set the path of the translation template (POT).
    ///
    /// Using `%master` here enables split mode: one POT per master document.
    /// The translation file pattern should then use `%master` too.
    pub fn set_master_translation_file(&mut self, pattern: &str) {
        self.master_translation_file = placeholder::normalize(pattern);
    }

    pub fn master_translation_file(&self) -> &str {
        &self.master_translation_file
    }

    /// Set the path of the translation inputs (PO).
    ///
    /// `%lang` expands to the target language, `%master` to the master
    /// document basename.
    pub fn set_translation_file(&mut self, pattern: &str) {
        self.translation_file = placeholder::normalize(pattern);
    }

    pub fn translation_file(&self) -> &str {
        &self.translation_file
    }

    /// Whether one POT/PO set is generated per master document.
    pub fn is_split_mode(&self) -> bool {
        placeholder::is_split_mode(&self.master_translation_file)
    }

    // =========================================================================
    // Base directories and invocation settings
    // =========================================================================

    /// Set the base directory for source files. An empty value unsets it.
    pub fn set_source_base_dir(&mut self, dir: impl Into<String>) {
        self.source_base_dir = non_empty(dir.into());
    }

    pub fn source_base_dir(&self) -> Option<&str> {
        self.source_base_dir.as_deref()
    }

    /// Set the base directory for destination files. An empty value unsets it.
    pub fn set_destination_base_dir(&mut self, dir: impl Into<String>) {
        self.destination_base_dir = non_empty(dir.into());
    }

    pub fn destination_base_dir(&self) -> Option<&str> {
        self.destination_base_dir.as_deref()
    }

    /// Use an existing po4a configuration file instead of a rendered one.
    pub fn set_config_file(&mut self, path: impl Into<PathBuf>) {
        self.config_file = Some(path.into());
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Override the po4a command (may include extra arguments).
    pub fn set_binary_name(&mut self, name: impl Into<String>) {
        self.binary_name = name.into();
    }

    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Po4aError::MissingParameter {
            field: field.to_string(),
        });
    }
    Ok(value)
}
