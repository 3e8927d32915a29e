//! Call dispatch service.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::domain::{Call, CallError, CommandCatalog, CommandResult, FilterRegistry};
use crate::service::adapter::CallAdapter;

/// Resolves calls to commands and runs them through their filter chains.
pub struct CallService {
    registry: FilterRegistry,
    catalog: CommandCatalog,
    adapter: CallAdapter,
}

impl CallService {
    /// Create a new CallService from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let catalog =
            CommandCatalog::from_config(config).context("Failed to build command catalog")?;
        Ok(Self::with_parts(FilterRegistry::from_config(config), catalog))
    }

    /// Create a CallService from prepared parts.
    pub fn with_parts(registry: FilterRegistry, catalog: CommandCatalog) -> Self {
        Self {
            registry,
            catalog,
            adapter: CallAdapter::new(),
        }
    }

    /// Read one call from stdin, dispatch it and write the outcome to stdout.
    ///
    /// Returns the process exit code.
    pub fn run(&self) -> Result<i32> {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;

        let (output, exit_code) = self.handle(&input);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        Ok(exit_code)
    }

    /// Handle raw JSON input, returning the JSON output and exit code.
    pub fn handle(&self, input: &str) -> (String, i32) {
        if input.trim().is_empty() {
            error!("No input received from stdin");
            return (
                self.adapter.format_error("No input received from stdin"),
                self.adapter.error_exit_code(),
            );
        }

        let call = match self.adapter.parse_input(input) {
            Ok(call) => call,
            Err(e) => {
                let message = format!("Failed to parse input: {}", e);
                error!("{}", message);
                return (
                    self.adapter.format_error(&message),
                    self.adapter.error_exit_code(),
                );
            }
        };

        let outcome = self.dispatch(&call);
        let exit_code = self.adapter.exit_code(&outcome);
        match self.adapter.format_output(&outcome) {
            Ok(output) => {
                info!(exit_code, "Output: {}", output);
                (output, exit_code)
            }
            Err(e) => {
                error!("{}", e);
                (
                    self.adapter.format_error(&e.to_string()),
                    self.adapter.error_exit_code(),
                )
            }
        }
    }

    /// Dispatch a call to its command through the filter chain.
    pub fn dispatch(&self, call: &Call) -> Result<CommandResult, CallError> {
        debug!(
            command = %call.command,
            session_id = ?call.context.session_id,
            "Dispatching call"
        );

        let command = self.catalog.resolve(&call.command)?;
        let outcome = self.registry.invoke(call, command.as_ref());

        if let Err(e) = &outcome {
            info!(command = %call.command, kind = e.kind(), "Call failed: {}", e);
        }
        outcome
    }

    /// Filter names per command, in catalog order.
    pub fn plan(&self) -> Result<Vec<(String, Vec<&'static str>)>, CallError> {
        self.catalog
            .iter()
            .map(|command| {
                let meta = command.meta();
                Ok((meta.name.clone(), self.registry.plan(meta)?))
            })
            .collect()
    }
}
