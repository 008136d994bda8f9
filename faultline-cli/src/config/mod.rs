//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use faultline::{FailureStrategy, PolicyKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Defaults for the failure channel
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Policy and strategy used when no flag or environment variable is given
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct DefaultsConfig {
    /// Policy overriding the build-time default
    pub policy: Option<PolicyKind>,

    /// Strategy overriding the preferred one
    pub strategy: Option<FailureStrategy>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|_| CliError::ConfigNotFound(path.display().to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Load `path` if given, otherwise fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}
