//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::TelemetryConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Semantic validation failed.
    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<TelemetryConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: TelemetryConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
