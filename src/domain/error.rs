//! Error types for call dispatch.

use thiserror::Error;

/// Errors raised while a call travels through the filter chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// A filter rejected a command that is no longer supported
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// A filter found the command in a state it must not be dispatched in
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// No command is registered under the requested name
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The call carried an argument the command cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The terminal command failed
    #[error("Command execution failed: {0}")]
    Execution(String),

    /// Internal defect, never caused by the caller
    #[error("Internal error: {0}")]
    Invariant(String),
}

impl CallError {
    /// Stable machine-readable name of the error variant.
    pub fn kind(&self) -> &'static str {
        match self {
            CallError::Unsupported(_) => "unsupported_operation",
            CallError::IllegalState(_) => "illegal_state",
            CallError::UnknownCommand(_) => "unknown_command",
            CallError::InvalidArgument(_) => "invalid_argument",
            CallError::Execution(_) => "execution_failed",
            CallError::Invariant(_) => "internal",
        }
    }

    /// Whether a quality filter in fail mode rejected the call.
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, CallError::Unsupported(_) | CallError::IllegalState(_))
    }
}
