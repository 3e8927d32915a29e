//! Missing description filter implementation.

use std::sync::Arc;

use super::{CallFilter, FilterChain, QualityConfig, QualityMode, QualityReporter, QualityViolation};
use crate::domain::{Call, CallError, Command, CommandResult};

/// Filter for commands that do not declare a description.
///
/// Registered only for commands lacking the description marker, so it does
/// not re-check the metadata itself.
pub struct DescriptionFilter {
    config: QualityConfig,
    reporter: Arc<dyn QualityReporter>,
}

impl DescriptionFilter {
    /// Create a new DescriptionFilter.
    pub fn new(config: QualityConfig, reporter: Arc<dyn QualityReporter>) -> Self {
        Self { config, reporter }
    }
}

impl CallFilter for DescriptionFilter {
    fn name(&self) -> &'static str {
        "description"
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
                    message: format!("Command {} has no description", name),
                });
                chain.proceed(call, command)
            }
            QualityMode::Fail => Err(CallError::IllegalState(format!(
                "Missing description for {}",
                name
            ))),
        }
    }
}
