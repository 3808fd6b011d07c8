//! Build option, build flag, and file types for the po4a configuration model.
//!
//! Option and flag names are the camelCase identifiers used in project files;
//! each maps to the command-line token po4a expects inside `[options]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A po4a build option that takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildOption {
    /// Extra options passed to the format modules (`-o`).
    Options,
    /// Minimum translated percentage to keep a translation (`-k`).
    Keep,
    /// Charset of the master documents (`-M`).
    MasterCharset,
    /// Charset of the localized documents (`-L`).
    LocalizedCharset,
    /// Charset of the addenda (`-A`).
    AddendumCharset,
    /// Report address for msgid bugs (`--msgid-bugs-address`).
    EmailAddress,
    /// Copyright holder in the POT header (`--copyright-holder`).
    Copyright,
    /// Package name in the POT header (`--package-name`).
    PackageName,
    /// Package version in the POT header (`--package-version`).
    PackageVersion,
}

impl BuildOption {
    /// Every recognized build option.
    pub const ALL: [BuildOption; 9] = [
        BuildOption::Options,
        BuildOption::Keep,
        BuildOption::MasterCharset,
        BuildOption::LocalizedCharset,
        BuildOption::AddendumCharset,
        BuildOption::EmailAddress,
        BuildOption::Copyright,
        BuildOption::PackageName,
        BuildOption::PackageVersion,
    ];

    /// Parse an option from its public name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.name() == s)
    }

    /// Public (project file) name of the option.
    pub fn name(self) -> &'static str {
        match self {
            BuildOption::Options => "options",
            BuildOption::Keep => "keep",
            BuildOption::MasterCharset => "masterCharset",
            BuildOption::LocalizedCharset => "localizedCharset",
            BuildOption::AddendumCharset => "addendumCharset",
            BuildOption::EmailAddress => "emailAddress",
            BuildOption::Copyright => "copyright",
            BuildOption::PackageName => "packageName",
            BuildOption::PackageVersion => "packageVersion",
        }
    }

    /// po4a command-line token for the option.
    pub fn token(self) -> &'static str {
        match self {
            BuildOption::Options => "-o",
            BuildOption::Keep => "-k",
            BuildOption::MasterCharset => "-M",
            BuildOption::LocalizedCharset => "-L",
            BuildOption::AddendumCharset => "-A",
            BuildOption::EmailAddress => "--msgid-bugs-address",
            BuildOption::Copyright => "--copyright-holder",
            BuildOption::PackageName => "--package-name",
            BuildOption::PackageVersion => "--package-version",
        }
    }
}

impl fmt::Display for BuildOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A po4a build flag (present or absent, no value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildFlag {
    /// Always regenerate POT and PO files (`-f`).
    Force,
    /// Do not touch files that did not change (`--stamp`).
    Stamp,
}

impl BuildFlag {
    /// Every recognized build flag.
    pub const ALL: [BuildFlag; 2] = [BuildFlag::Force, BuildFlag::Stamp];

    /// Parse a flag from its public name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == s)
    }

    /// Public (project file) name of the flag.
    pub fn name(self) -> &'static str {
        match self {
            BuildFlag::Force => "force",
            BuildFlag::Stamp => "stamp",
        }
    }

    /// po4a command-line token for the flag.
    pub fn token(self) -> &'static str {
        match self {
            BuildFlag::Force => "-f",
            BuildFlag::Stamp => "--stamp",
        }
    }
}

impl fmt::Display for BuildFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered document to translate.
///
/// `target_file` is stored with placeholders already normalized to po4a
/// variables (`$lang`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    file_type: String,
    master_file: String,
    target_file: String,
}

impl FileEntry {
    pub(crate) fn new(file_type: String, master_file: String, target_file: String) -> Self {
        Self {
            file_type,
            master_file,
            target_file,
        }
    }

    /// Document format understood by po4a (xhtml, docbook, man...).
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// Path to the master (source) document. Also the entry's unique key.
    pub fn master_file(&self) -> &str {
        &self.master_file
    }

    /// Path pattern of the translated document.
    pub fn target_file(&self) -> &str {
        &self.target_file
    }
}

/// A file descriptor as supplied by callers or project files.
///
/// All fields are optional at this level so that a missing one can be
/// reported by name instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSpec {
    /// Path to the master document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_file: Option<String>,

    /// Document format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,

    /// Path pattern of the translated document (may contain `%lang`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_file: Option<String>,
}

impl FileSpec {
    /// Build a complete descriptor.
    pub fn new(
        file_type: impl Into<String>,
        master_file: impl Into<String>,
        target_file: impl Into<String>,
    ) -> Self {
        Self {
            master_file: Some(master_file.into()),
            file_type: Some(file_type.into()),
            target_file: Some(target_file.into()),
        }
    }
}
