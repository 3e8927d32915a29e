//! Sleep command implementation.

use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::domain::{Call, CallError, Command, CommandMeta, CommandResult};

/// Upper bound for a single pause.
const MAX_SLEEP_MS: u64 = 10_000;

/// Pauses the calling thread for `millis` milliseconds.
pub struct SleepCommand {
    meta: CommandMeta,
}

impl SleepCommand {
    /// Create a new SleepCommand.
    pub fn new(meta: CommandMeta) -> Self {
        Self { meta }
    }

    fn millis(call: &Call) -> Result<u64, CallError> {
        match call.arguments.get("millis") {
            None | Some(Value::Null) => Ok(0),
            Some(value) => value.as_u64().ok_or_else(|| {
                CallError::InvalidArgument(format!(
                    "millis must be a non-negative integer, got {}",
                    value
                ))
            }),
        }
    }
}

impl Command for SleepCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn execute(&self, call: &Call, result: &mut CommandResult) -> Result<(), CallError> {
        let millis = Self::millis(call)?.min(MAX_SLEEP_MS);
        thread::sleep(Duration::from_millis(millis));
        result.insert("slept_ms".to_string(), Value::from(millis));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let command = SleepCommand::new(CommandMeta::new("sleep"));
        let mut result = CommandResult::new();
        command.execute(&Call::new("sleep"), &mut result).unwrap();
        assert_eq!(result.get("slept_ms"), Some(&Value::from(0)));
    }

    #[test]
    fn test_sleeps_requested_time() {
        let command = SleepCommand::new(CommandMeta::new("sleep"));
        let mut result = CommandResult::new();
        command
            .execute(&Call::new("sleep").with_argument("millis", 5), &mut result)
            .unwrap();
        assert_eq!(result.get("slept_ms"), Some(&Value::from(5)));
    }

    #[test]
    fn test_rejects_negative_millis() {
        let command = SleepCommand::new(CommandMeta::new("sleep"));
        let mut result = CommandResult::new();
        let err = command
            .execute(&Call::new("sleep").with_argument("millis", -1), &mut result)
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_argument");
        assert!(result.is_empty());
    }
}
