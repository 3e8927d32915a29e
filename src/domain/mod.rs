//! Domain layer containing core call processing logic.
//!
//! This module contains:
//! - Call, command and result types
//! - Filter trait, filter chain and the built-in filters
//! - Built-in commands and their catalog
//! - Locale resolution and ISO code conversion
//! - Logger with rotation

pub mod codec;
pub mod commands;
mod error;
pub mod filters;
mod locale;
pub mod logger;
mod types;

pub use commands::CommandCatalog;
pub use error::CallError;
pub use filters::{CallFilter, FilterChain, FilterRegistry};
pub use locale::{Locale, LocaleProvider};
pub use types::{Call, CallContext, Command, CommandMeta, CommandResult, Marker};
