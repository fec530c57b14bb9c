//! Configuration file support for the command-line front end.
//!
//! Reads default units and observer context from `astronomia.toml`:
//!
//! ```toml
//! [defaults]
//! input_unit = "deg"
//! output_unit = "hms"
//!
//! [observer]
//! phi_deg = 40.4168
//! TS_h = 5.25
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::context::ContextParams;
use crate::core::domain::Unit;
use crate::error::{TransformError, TransformResult};

/// Name of the configuration file searched by [`TransformConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "astronomia.toml";

/// Transformation configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformConfig {
    #[serde(default)]
    pub defaults: DefaultSettings,
    /// Context parameters by keyword (`phi_deg`, `TS_h`, ...).
    #[serde(default)]
    pub observer: BTreeMap<String, f64>,
}

/// Default units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultSettings {
    #[serde(default = "default_unit")]
    pub input_unit: String,
    #[serde(default = "default_unit")]
    pub output_unit: String,
}

fn default_unit() -> String {
    Unit::Degree.tag().to_string()
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            input_unit: default_unit(),
            output_unit: default_unit(),
        }
    }
}

impl TransformConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(TransformConfig)` if successful
    /// * `Err(TransformError::ConfigurationError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> TransformResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            TransformError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> TransformResult<Self> {
        toml::from_str(content).map_err(|e| {
            TransformError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `astronomia.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> TransformResult<Self> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("rust_backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Err(TransformError::ConfigurationError(format!(
            "No {} found in standard locations",
            CONFIG_FILE_NAME
        )))
    }

    /// Default input unit.
    pub fn input_unit(&self) -> TransformResult<Unit> {
        parse_unit("defaults.input_unit", &self.defaults.input_unit)
    }

    /// Default output unit.
    pub fn output_unit(&self) -> TransformResult<Unit> {
        parse_unit("defaults.output_unit", &self.defaults.output_unit)
    }

    /// Observer table as context parameters. Unknown keys are dropped with a
    /// warning.
    pub fn context_params(&self) -> ContextParams {
        ContextParams::from_pairs(self.observer.iter().map(|(k, v)| (k.as_str(), *v)))
    }
}

fn parse_unit(setting: &str, value: &str) -> TransformResult<Unit> {
    Unit::from_str(value).map_err(|e| {
        TransformError::ConfigurationError(format!("Invalid '{}' setting: {}", setting, e))
    })
}
