//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the telemetry
//! component. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Root configuration for HTTP client telemetry.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Error-classification policy settings.
    pub classification: ClassificationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Error-classification policy configuration.
///
/// Controls which response status codes count as an error outcome and
/// therefore carry an `error.type` attribute on the recorded sample.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Inclusive status-code ranges classified as errors.
    pub error_status_ranges: Vec<StatusRange>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        // Client-role default: 4xx and 5xx are errors.
        Self {
            error_status_ranges: vec![StatusRange {
                start: 400,
                end: 599,
            }],
        }
    }
}

/// An inclusive range of HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusRange {
    /// First status code in the range.
    pub start: u16,

    /// Last status code in the range (inclusive).
    pub end: u16,
}

impl StatusRange {
    /// Check whether a status code falls inside this range.
    pub fn contains(&self, status_code: u16) -> bool {
        self.start <= status_code && status_code <= self.end
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
