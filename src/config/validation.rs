//! Configuration validation.

use anyhow::{bail, Result};
use regex::Regex;
use std::collections::HashSet;

use super::Config;
use crate::domain::Locale;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Validate log path
    if config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    if let Err(e) = Locale::parse(&config.default_locale) {
        bail!("default_locale: {}", e);
    }

    // Each filter may be installed once; its position is its nesting depth
    let mut seen = HashSet::new();
    for (i, kind) in config.filters.iter().enumerate() {
        if !seen.insert(kind) {
            bail!("filters[{}]: '{}' is listed more than once", i, kind);
        }
    }

    let name_pattern = Regex::new(r"^[A-Za-z][A-Za-z0-9_.-]*$")?;
    let mut names = HashSet::new();
    for (i, command) in config.commands.iter().enumerate() {
        if command.name.is_empty() {
            bail!("commands[{}]: name cannot be empty", i);
        }

        if !name_pattern.is_match(&command.name) {
            bail!(
                "commands[{}]: invalid name '{}' (letters, digits, '_', '.', '-'; must start with a letter)",
                i,
                command.name
            );
        }

        if !names.insert(command.name.as_str()) {
            bail!("commands[{}]: duplicate name '{}'", i, command.name);
        }
    }

    Ok(())
}
