//! Deprecated command filter implementation.

use std::sync::Arc;

use super::{CallFilter, FilterChain, QualityConfig, QualityMode, QualityReporter, QualityViolation};
use crate::domain::{Call, CallError, Command, CommandResult};

/// Filter for calls to deprecated commands.
pub struct DeprecationFilter {
    config: QualityConfig,
    reporter: Arc<dyn QualityReporter>,
}

impl DeprecationFilter {
    /// Create a new DeprecationFilter.
    pub fn new(config: QualityConfig, reporter: Arc<dyn QualityReporter>) -> Self {
        Self { config, reporter }
    }
}

impl CallFilter for DeprecationFilter {
    fn name(&self) -> &'static str {
        "deprecation"
    }

    fn filter(
        &self,
        call: &Call,
        command: &dyn Command,
        chain: FilterChain<'_>,
    ) -> Result<CommandResult, CallError> {
        let name = &command.meta().name;
        match self.config.mode {
            QualityMode::Warn => {
                self.reporter.warn(&QualityViolation {
                    filter: self.name(),
                    command: name.clone(),
                    message: format!("Command {} is deprecated", name),
                });
                chain.proceed(call, command)
            }
            QualityMode::Fail => Err(CallError::Unsupported(format!("{} is deprecated", name))),
        }
    }
}
