//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (status codes within the HTTP range)
//! - Check the log level is one tracing understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TelemetryConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::TelemetryConfig;

const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A status range has start > end.
    EmptyStatusRange { start: u16, end: u16 },

    /// A status range reaches outside 100..=599.
    StatusCodeOutOfRange { start: u16, end: u16 },

    /// The configured log level is not a known tracing level.
    UnknownLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyStatusRange { start, end } => {
                write!(f, "empty status range: {}..={}", start, end)
            }
            ValidationError::StatusCodeOutOfRange { start, end } => {
                write!(f, "status range {}..={} outside 100..=599", start, end)
            }
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "unknown log level: {}", level)
            }
        }
    }
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &TelemetryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for range in &config.classification.error_status_ranges {
        if range.start > range.end {
            errors.push(ValidationError::EmptyStatusRange {
                start: range.start,
                end: range.end,
            });
        } else if range.start < 100 || range.end > 599 {
            errors.push(ValidationError::StatusCodeOutOfRange {
                start: range.start,
                end: range.end,
            });
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !KNOWN_LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
