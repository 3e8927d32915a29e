//! JSON adapter between stdin/stdout and the call dispatcher.
//!
//! Input is a single call object:
//! `{"command": "echo", "arguments": {..}, "context": {"locale": "de_DE"}}`.
//! Output is `{"status": "ok", "result": {..}}` or
//! `{"status": "error", "kind": "..", "message": ".."}`.

use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use tracing::debug;

use crate::domain::{Call, CallError, CommandResult};

/// Exit code of a successful call.
pub const EXIT_OK: i32 = 0;
/// Exit code of a failed call or unreadable input.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code of a call rejected by a quality filter.
pub const EXIT_REJECTED: i32 = 2;

/// Converts between wire JSON and internal types.
#[derive(Debug, Default)]
pub struct CallAdapter;

impl CallAdapter {
    /// Create a new adapter.
    pub fn new() -> Self {
        Self
    }

    /// Parse a call from JSON input.
    pub fn parse_input(&self, input: &str) -> Result<Call> {
        debug!(raw_input = %input, "Raw call input");

        let call: Call =
            serde_json::from_str(input).map_err(|e| anyhow!("Failed to parse call: {}", e))?;
        if call.command.trim().is_empty() {
            bail!("Missing command name");
        }

        debug!(
            command = %call.command,
            arguments = call.arguments.len(),
            locale = ?call.context.locale,
            session_id = ?call.context.session_id,
            "Parsed call"
        );
        Ok(call)
    }

    /// Format the outcome of a call.
    pub fn format_output(&self, outcome: &Result<CommandResult, CallError>) -> Result<String> {
        let output = match outcome {
            Ok(result) => CallOutput::Ok { result },
            Err(e) => CallOutput::Error {
                kind: e.kind(),
                message: e.to_string(),
            },
        };
        serde_json::to_string(&output).map_err(|e| anyhow!("Failed to serialize output: {}", e))
    }

    /// Exit code for the outcome of a call.
    pub fn exit_code(&self, outcome: &Result<CommandResult, CallError>) -> i32 {
        match outcome {
            Ok(_) => EXIT_OK,
            Err(e) if e.is_policy_violation() => EXIT_REJECTED,
            Err(_) => EXIT_FAILURE,
        }
    }

    /// Format an error that occurred before dispatch, such as unreadable input.
    pub fn format_error(&self, message: &str) -> String {
        serde_json::json!({
            "status": "error",
            "kind": "invalid_input",
            "message": message
        })
        .to_string()
    }

    /// Exit code for errors reported through `format_error`.
    pub fn error_exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Wire format of a call outcome.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum CallOutput<'a> {
    Ok {
        result: &'a CommandResult,
    },
    Error {
        kind: &'static str,
        message: String,
    },
}
