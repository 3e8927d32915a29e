//! Command catalog built from configuration.

use std::collections::HashMap;
use std::sync::Arc;

use super::{EchoCommand, LocaleCommand, SleepCommand};
use crate::config::{CommandConfig, Config, HandlerKind};
use crate::domain::{CallError, Command, CommandMeta, Locale, LocaleProvider};

/// Commands a dispatcher can resolve by name.
#[derive(Default)]
pub struct CommandCatalog {
    commands: Vec<Arc<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog of configured commands.
    pub fn from_config(config: &Config) -> Result<Self, CallError> {
        let provider = LocaleProvider::new(Locale::parse(&config.default_locale)?);

        let mut catalog = Self::new();
        for entry in &config.commands {
            catalog.register(Self::build(entry, &provider))?;
        }
        Ok(catalog)
    }

    fn build(entry: &CommandConfig, provider: &LocaleProvider) -> Arc<dyn Command> {
        let meta = CommandMeta {
            name: entry.name.clone(),
            description: entry.description.clone(),
            deprecated: entry.deprecated,
        };
        match entry.handler {
            HandlerKind::Echo => Arc::new(EchoCommand::new(meta)),
            HandlerKind::Locale => Arc::new(LocaleCommand::new(meta, provider.clone())),
            HandlerKind::Sleep => Arc::new(SleepCommand::new(meta)),
        }
    }

    /// Add a command. Names must be unique.
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<(), CallError> {
        let name = command.meta().name.clone();
        if self.index.contains_key(&name) {
            return Err(CallError::Invariant(format!(
                "command {} registered twice",
                name
            )));
        }
        self.index.insert(name, self.commands.len());
        self.commands.push(command);
        Ok(())
    }

    /// Resolve a command by name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Command>, CallError> {
        self.index
            .get(name)
            .map(|&i| self.commands[i].clone())
            .ok_or_else(|| CallError::UnknownCommand(name.to_string()))
    }

    /// All commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.iter()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the catalog holds no command.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, handler: HandlerKind) -> CommandConfig {
        CommandConfig {
            name: name.to_string(),
            handler,
            description: Some(format!("{} command", name)),
            deprecated: false,
        }
    }

    #[test]
    fn test_from_config_resolves_by_name() {
        let config = Config {
            commands: vec![
                entry("echo", HandlerKind::Echo),
                entry("whoami.locale", HandlerKind::Locale),
            ],
            ..Config::default()
        };
        let catalog = CommandCatalog::from_config(&config).unwrap();

        assert_eq!(catalog.len(), 2);
        let command = catalog.resolve("whoami.locale").unwrap();
        assert_eq!(command.meta().name, "whoami.locale");
        assert_eq!(
            command.meta().description.as_deref(),
            Some("whoami.locale command")
        );
        let names: Vec<_> = catalog.iter().map(|c| c.meta().name.clone()).collect();
        assert_eq!(names, vec!["echo", "whoami.locale"]);
    }

    #[test]
    fn test_unknown_command() {
        let catalog = CommandCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.resolve("missing").err(),
            Some(CallError::UnknownCommand("missing".to_string()))
        );
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let config = Config {
            commands: vec![entry("echo", HandlerKind::Echo), entry("echo", HandlerKind::Sleep)],
            ..Config::default()
        };
        assert!(CommandCatalog::from_config(&config).is_err());
    }
}
