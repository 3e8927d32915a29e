//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use super::validation;
use crate::domain::filters::{BenchmarkConfig, QualityConfig};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Locale used when a call carries none
    pub default_locale: String,

    /// Installed filters, outermost first
    pub filters: Vec<FilterKind>,

    /// Benchmark filter settings
    pub benchmark: BenchmarkConfig,

    /// Quality assurance filter settings
    pub qa: QualityConfig,

    /// Commands served by the dispatcher
    pub commands: Vec<CommandConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: default_log_path(),
            default_locale: "en".to_string(),
            filters: vec![
                FilterKind::Benchmark,
                FilterKind::Deprecation,
                FilterKind::Description,
            ],
            benchmark: BenchmarkConfig::default(),
            qa: QualityConfig::default(),
            commands: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the comprehensive validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// Filters that can be installed, by configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Reports slow calls; applies to every command
    Benchmark,
    /// Warns about or rejects deprecated commands
    Deprecation,
    /// Warns about or rejects commands without description
    Description,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterKind::Benchmark => "benchmark",
            FilterKind::Deprecation => "deprecation",
            FilterKind::Description => "description",
        })
    }
}

/// Built-in handler a configured command is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    /// Returns the call arguments
    Echo,
    /// Returns the resolved call locale and its ISO codes
    Locale,
    /// Sleeps for the `millis` argument
    Sleep,
}

/// Command configuration.
///
/// # Examples
///
/// ```toml
/// [[commands]]
/// name = "legacy.echo"
/// handler = "echo"
/// description = "Old echo endpoint"
/// deprecated = true
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CommandConfig {
    /// Unique command name
    pub name: String,

    /// Handler executing the command
    pub handler: HandlerKind,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the command is deprecated
    #[serde(default)]
    pub deprecated: bool,
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("callguard")
        })
        .join("logs")
}
