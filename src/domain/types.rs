//! Core domain types for calls, commands and results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CallError;

/// Result container filled by the terminal command.
pub type CommandResult = Map<String, Value>;

/// One inbound request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Call {
    /// Name of the target command
    pub command: String,

    /// Call arguments
    #[serde(default)]
    pub arguments: Map<String, Value>,

    /// Call-scoped metadata
    #[serde(default)]
    pub context: CallContext,
}

impl Call {
    /// Create a call without arguments or context.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    /// Add an argument.
    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Set the locale carried in the call context.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.context.locale = Some(locale.into());
        self
    }
}

/// Metadata attached to a call by the transport.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CallContext {
    /// Locale tag of the caller, e.g. "de_DE"
    #[serde(default)]
    pub locale: Option<String>,

    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Declarative markers a command may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Command is deprecated
    Deprecated,
    /// Command declares a human-readable description
    Description,
}

/// Static metadata of a command type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandMeta {
    /// Unique command name
    pub name: String,

    /// Human-readable description
    pub description: Option<String>,

    /// Deprecation flag
    pub deprecated: bool,
}

impl CommandMeta {
    /// Create metadata for an undocumented, supported command.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecated: false,
        }
    }

    /// Attach a description.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark as deprecated.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Check whether the command carries the given marker.
    /// A blank description does not count as one.
    pub fn has_marker(&self, marker: Marker) -> bool {
        match marker {
            Marker::Deprecated => self.deprecated,
            Marker::Description => self
                .description
                .as_deref()
                .is_some_and(|d| !d.trim().is_empty()),
        }
    }
}

/// Terminal handler of a call.
pub trait Command: Send + Sync {
    /// Static metadata of this command.
    fn meta(&self) -> &CommandMeta;

    /// Execute the command, writing its output into `result`.
    fn execute(&self, call: &Call, result: &mut CommandResult) -> Result<(), CallError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        let meta = CommandMeta::new("Foo").described("Does foo");
        assert!(meta.has_marker(Marker::Description));
        assert!(!meta.has_marker(Marker::Deprecated));

        let meta = CommandMeta::new("Bar").deprecated();
        assert!(meta.has_marker(Marker::Deprecated));
        assert!(!meta.has_marker(Marker::Description));
    }

    #[test]
    fn test_blank_description_is_not_a_marker() {
        let meta = CommandMeta::new("Baz").described("   ");
        assert!(!meta.has_marker(Marker::Description));
    }

    #[test]
    fn test_call_deserialization_defaults() {
        let call: Call = serde_json::from_str(r#"{"command":"echo"}"#).unwrap();
        assert_eq!(call.command, "echo");
        assert!(call.arguments.is_empty());
        assert!(call.context.locale.is_none());
    }

    #[test]
    fn test_call_deserialization_full() {
        let call: Call = serde_json::from_str(
            r#"{"command":"echo","arguments":{"a":1},"context":{"locale":"de_DE","session_id":"s1"}}"#,
        )
        .unwrap();
        assert_eq!(call.arguments.get("a"), Some(&Value::from(1)));
        assert_eq!(call.context.locale.as_deref(), Some("de_DE"));
        assert_eq!(call.context.session_id.as_deref(), Some("s1"));
    }
}
