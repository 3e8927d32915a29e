//! callguard: call-filter chains for IPC command dispatch.
//!
//! Commands resolved by a dispatcher pass through an ordered chain of
//! filters before they execute. Built-in filters benchmark slow calls and
//! warn about or reject deprecated and undocumented commands. Locale
//! resolution and ISO code conversion are provided for command handlers.

pub mod cli;
pub mod config;
pub mod domain;
pub mod service;
