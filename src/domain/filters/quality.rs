//! Shared policy for quality assurance filters.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How quality assurance filters react to a violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityMode {
    /// Log a warning and let the call pass
    #[default]
    Warn,
    /// Reject the call
    Fail,
}

/// Configuration shared by all quality assurance filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Reaction to violations
    pub mode: QualityMode,
}

/// A violation observed by a quality filter running in warn mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityViolation {
    /// Name of the reporting filter
    pub filter: &'static str,

    /// Name of the offending command
    pub command: String,

    /// Operator-facing message
    pub message: String,
}

/// Sink for quality warnings.
pub trait QualityReporter: Send + Sync {
    /// Report a violation that did not stop the call.
    fn warn(&self, violation: &QualityViolation);
}

/// Reports violations through the process log.
#[derive(Debug, Default)]
pub struct LogQualityReporter;

impl QualityReporter for LogQualityReporter {
    fn warn(&self, violation: &QualityViolation) {
        warn!(
            filter = violation.filter,
            command = %violation.command,
            "{}",
            violation.message
        );
    }
}
