//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Call-filter chain runner for IPC commands
#[derive(Parser)]
#[command(
    name = "callguard",
    version,
    about = "Call-filter chain runner for IPC commands",
    long_about = "Runs calls through a configured chain of benchmark and quality assurance \
                  filters, and shows which filters apply to which command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Dispatch one JSON call read from stdin (alias: run)
    #[command(alias = "run")]
    Call,
    /// Show the filter chain of every configured command
    Plan,
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}
