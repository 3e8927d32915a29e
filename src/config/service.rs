//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::default_log_path_for_config_dir;
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path: ~/.config/callguard/config.toml.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("callguard")
            .join("config.toml")
    }

    /// Load configuration from file.
    ///
    /// If `path` is `None`, uses the default path.
    /// If the file doesn't exist, creates default configuration file.
    /// Validates configuration after loading.
    /// Log path defaults to the same directory as config file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        if !path.exists() {
            Self::generate_at(&path)?;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, path.parent())
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Parse and validate configuration content.
    ///
    /// An unset `log_path` resolves to `<config_dir>/logs`.
    pub fn parse(content: &str, config_dir: Option<&Path>) -> Result<Config> {
        let mut config: Config = toml::from_str(content).context("Failed to parse TOML")?;

        // log_path equal to the general default means it was not set in the file
        if config.log_path == default_log_path_for_config_dir(None) {
            config.log_path = default_log_path_for_config_dir(config_dir);
        }

        config.validate()?;
        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> &'static str {
        r#"# callguard configuration file

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# log_path = "~/.config/callguard/logs"

# Locale used when a call does not carry one (default: "en")
default_locale = "en"

# Installed filters, outermost first. The first filter wraps all others.
# Available: "benchmark", "deprecation", "description"
filters = ["benchmark", "deprecation", "description"]

# Execution time benchmarking (applies to every command)
[benchmark]
active = true
# Calls slower than threshold are logged
threshold = 100
# nanoseconds, microseconds, milliseconds, seconds, minutes, hours, days
threshold_unit = "milliseconds"

# Quality assurance for deprecated and undocumented commands
[qa]
# "warn" logs a warning and lets the call pass, "fail" rejects the call
mode = "warn"

# Commands served by `callguard call`
# handler: "echo" (returns arguments), "locale" (resolves call locale), "sleep" (waits `millis`)
[[commands]]
name = "echo"
handler = "echo"
description = "Returns the call arguments unchanged"

[[commands]]
name = "locale"
handler = "locale"
description = "Resolves the call locale and its ISO 639 / ISO 3166 codes"

[[commands]]
name = "sleep"
handler = "sleep"
description = "Waits for the given number of milliseconds"

# [[commands]]
# name = "legacy.echo"
# handler = "echo"
# deprecated = true
"#
    }
}
