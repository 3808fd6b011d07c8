//! Project file loading and serialization.

use super::model::ConfigModel;
use super::options::ModelOptions;
use crate::error::{Po4aError, Result};
use std::path::Path;

impl ModelOptions {
    /// Load options from a YAML project file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the project file
    ///
    /// # Returns
    ///
    /// * `Ok(ModelOptions)` - Successfully parsed options
    /// * `Err(Po4aError::UserError)` - Read or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            Po4aError::UserError(format!(
                "failed to read project file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| Po4aError::UserError(format!("failed to parse project YAML: {}", e)))
    }

    /// Serialize options to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            Po4aError::UserError(format!("failed to serialize project to YAML: {}", e))
        })
    }
}

impl ConfigModel {
    /// Load a model from a YAML project file.
    ///
    /// A relative `configFile` is resolved against the project file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut options = ModelOptions::load(path)?;

        if let Some(config_file) = options.config_file.take() {
            let resolved = match path.parent() {
                Some(parent) if config_file.is_relative() => parent.join(config_file),
                _ => config_file,
            };
            options.config_file = Some(resolved);
        }

        Self::from_options(options)
    }

    /// Build a model from a YAML project string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_options(ModelOptions::from_yaml(yaml)?)
    }
}
