//! Echo command implementation.

use crate::domain::{Call, CallError, Command, CommandMeta, CommandResult};

/// Copies the call arguments into the result.
pub struct EchoCommand {
    meta: CommandMeta,
}

impl EchoCommand {
    /// Create a new EchoCommand.
    pub fn new(meta: CommandMeta) -> Self {
        Self { meta }
    }
}

impl Command for EchoCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn execute(&self, call: &Call, result: &mut CommandResult) -> Result<(), CallError> {
        result.extend(call.arguments.clone());
        Ok(())
    }
}
