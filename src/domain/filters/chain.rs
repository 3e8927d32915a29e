//! Filter chain implementation.

use std::sync::Arc;

use tracing::trace;

use super::CallFilter;
use crate::domain::{Call, CallError, Command, CommandResult};

/// Remaining filters of one call, followed by the terminal command.
///
/// `proceed` consumes the chain, so a filter can continue at most once.
pub struct FilterChain<'a> {
    filters: &'a [Arc<dyn CallFilter>],
}

impl<'a> FilterChain<'a> {
    /// Create a chain positioned before the first of `filters`.
    pub fn new(filters: &'a [Arc<dyn CallFilter>]) -> Self {
        Self { filters }
    }

    /// Hand the call to the next filter, or execute the command once none remain.
    pub fn proceed(self, call: &Call, command: &dyn Command) -> Result<CommandResult, CallError> {
        match self.filters.split_first() {
            Some((filter, rest)) => {
                trace!(
                    filter = filter.name(),
                    command = %command.meta().name,
                    remaining = rest.len(),
                    "Entering filter"
                );
                filter.filter(call, command, FilterChain { filters: rest })
            }
            None => {
                trace!(command = %command.meta().name, "Executing command");
                let mut result = CommandResult::new();
                command.execute(call, &mut result)?;
                Ok(result)
            }
        }
    }
}
