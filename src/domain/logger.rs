//! File logging with daily rotation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// File name prefix of log files.
const LOG_PREFIX: &str = "callguard";

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "CALLGUARD_LOG";

/// How long rotated log files are kept.
const LOG_RETENTION: Duration = Duration::from_secs(2 * 24 * 60 * 60);

/// Initialize the logging system.
///
/// Everything down to debug level is written unless `CALLGUARD_LOG` says otherwise.
pub fn init(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.log_path).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            config.log_path.display()
        )
    })?;

    let removed = cleanup_old_logs(&config.log_path, SystemTime::now())?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_path, LOG_PREFIX);

    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(timer),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::debug!(removed, "Logging initialized");
    Ok(())
}

/// Remove our log files last modified before `now - LOG_RETENTION`.
///
/// Returns the number of removed files.
pub fn cleanup_old_logs(log_path: &Path, now: SystemTime) -> Result<usize> {
    if !log_path.exists() {
        return Ok(0);
    }

    let cutoff = now.checked_sub(LOG_RETENTION).unwrap_or(SystemTime::UNIX_EPOCH);
    let mut removed = 0;

    for entry in fs::read_dir(log_path)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let ours = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(LOG_PREFIX));
        if !ours {
            continue;
        }

        let modified = fs::metadata(&path).and_then(|m| m.modified());
        if matches!(modified, Ok(time) if time < cutoff) && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }

    Ok(removed)
}
