//! Error classification for completed responses.

use crate::config::{ClassificationConfig, StatusRange};

/// Decides whether a response status code counts as an error outcome.
///
/// Supplied by the host; [`RangeStatusPolicy`] is the shipped
/// implementation.
pub trait StatusPolicy: Send + Sync {
    /// True when the status code should carry an `error.type` attribute.
    fn is_error(&self, status_code: u16) -> bool;
}

/// Range-based policy driven by configuration.
#[derive(Debug, Clone)]
pub struct RangeStatusPolicy {
    ranges: Vec<StatusRange>,
}

impl RangeStatusPolicy {
    /// Build a policy from explicit ranges.
    pub fn new(ranges: Vec<StatusRange>) -> Self {
        Self { ranges }
    }

    /// Build a policy from the classification config section.
    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self::new(config.error_status_ranges.clone())
    }
}

impl Default for RangeStatusPolicy {
    /// Client-role default: 4xx and 5xx are errors.
    fn default() -> Self {
        Self::from_config(&ClassificationConfig::default())
    }
}

impl StatusPolicy for RangeStatusPolicy {
    fn is_error(&self, status_code: u16) -> bool {
        self.ranges.iter().any(|range| range.contains(status_code))
    }
}

/// Canonical `error.type` value for an error status code.
pub fn status_error_type(status_code: u16) -> String {
    status_code.to_string()
}
