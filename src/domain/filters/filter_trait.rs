//! Filter trait definition.

use super::FilterChain;
use crate::domain::{Call, CallError, Command, CommandResult};

/// Cross-cutting interceptor wrapping command execution.
pub trait CallFilter: Send + Sync {
    /// Short name used in configuration and filter plans.
    fn name(&self) -> &'static str;

    /// Filter the call.
    ///
    /// Implementations continue by calling `chain.proceed(call, command)`.
    /// Returning without doing so short-circuits the call.
    fn filter(
        &self,
        call: &Call,
        command: &dyn Command,
        chain: FilterChain<'_>,
    ) -> Result<CommandResult, CallError>;
}
