//! Typed construction options for [`ConfigModel`].
//!
//! `ModelOptions` is the project-file shape: every recognized key is a named
//! field, and unknown keys in YAML are ignored for forward compatibility.

use super::model::ConfigModel;
use super::types::FileSpec;
use crate::error::Result;
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything needed to build a [`ConfigModel`] in one go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelOptions {
    /// Named build options, in document order. Unknown names are dropped.
    #[serde(
        deserialize_with = "deserialize_build_options",
        serialize_with = "serialize_build_options",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub build_options: Vec<(String, String)>,

    /// Documents to translate.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileSpec>,

    /// POT path pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_translation_file: Option<String>,

    /// PO path pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_languages: Vec<String>,

    /// Named build flags. Unknown names are dropped.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub build_flags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_base_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_base_dir: Option<String>,

    /// Existing po4a configuration to use instead of rendering one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,

    /// po4a command override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_name: Option<String>,
}

impl ConfigModel {
    /// Build a model from options.
    ///
    /// Fields are applied in a fixed order: build options, files, master
    /// translation file, translation file, then the remaining scalar fields.
    /// Fails only when a file descriptor is incomplete.
    pub fn from_options(options: ModelOptions) -> Result<Self> {
        let mut model = ConfigModel::new();

        model.set_build_options(options.build_options);
        model.add_files(&options.files)?;

        if let Some(pattern) = options.master_translation_file {
            model.set_master_translation_file(&pattern);
        }
        if let Some(pattern) = options.translation_file {
            model.set_translation_file(&pattern);
        }

        if let Some(language) = options.source_language {
            model.set_source_language(language);
        }
        model.set_target_languages(options.target_languages);
        for flag in &options.build_flags {
            model.set_build_flag_named(flag);
        }
        if let Some(dir) = options.source_base_dir {
            model.set_source_base_dir(dir);
        }
        if let Some(dir) = options.destination_base_dir {
            model.set_destination_base_dir(dir);
        }
        if let Some(path) = options.config_file {
            model.set_config_file(path);
        }
        if let Some(name) = options.binary_name {
            model.set_binary_name(name);
        }

        Ok(model)
    }
}

/// Read `buildOptions` as an ordered mapping, stringifying scalar values so
/// that `keep: 0` works as well as `keep: "0"`.
fn deserialize_build_options<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    let mapping = serde_yaml::Mapping::deserialize(deserializer)?;
    mapping
        .into_iter()
        .map(|(key, value)| -> std::result::Result<(String, String), D::Error> {
            let key = scalar_to_string(&key)
                .ok_or_else(|| D::Error::custom("buildOptions keys must be scalars"))?;
            let value = scalar_to_string(&value).ok_or_else(|| {
                D::Error::custom(format!("buildOptions.{} must be a scalar value", key))
            })?;
            Ok((key, value))
        })
        .collect()
}

fn serialize_build_options<S>(
    options: &[(String, String)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(options.len()))?;
    for (key, value) in options {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
