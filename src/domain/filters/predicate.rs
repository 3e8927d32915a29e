//! Command predicates deciding filter applicability.

use crate::domain::{CommandMeta, Marker};

/// Pure function of command metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandPredicate {
    /// Applies to every command
    Always,
    /// Applies to commands carrying the marker
    HasMarker(Marker),
    /// Applies to commands lacking the marker
    LacksMarker(Marker),
}

impl CommandPredicate {
    /// Evaluate the predicate against command metadata.
    pub fn matches(&self, meta: &CommandMeta) -> bool {
        match self {
            CommandPredicate::Always => true,
            CommandPredicate::HasMarker(marker) => meta.has_marker(*marker),
            CommandPredicate::LacksMarker(marker) => !meta.has_marker(*marker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_matches() {
        assert!(CommandPredicate::Always.matches(&CommandMeta::new("Foo")));
    }

    #[test]
    fn test_has_and_lacks_are_complementary() {
        let metas = [
            CommandMeta::new("a"),
            CommandMeta::new("b").deprecated(),
            CommandMeta::new("c").described("c"),
            CommandMeta::new("d").described("d").deprecated(),
        ];
        for meta in &metas {
            for marker in [Marker::Deprecated, Marker::Description] {
                assert_ne!(
                    CommandPredicate::HasMarker(marker).matches(meta),
                    CommandPredicate::LacksMarker(marker).matches(meta),
                    "{} / {:?}",
                    meta.name,
                    marker
                );
            }
        }
    }

    #[test]
    fn test_has_marker_deprecated() {
        let predicate = CommandPredicate::HasMarker(Marker::Deprecated);
        assert!(predicate.matches(&CommandMeta::new("Bar").deprecated()));
        assert!(!predicate.matches(&CommandMeta::new("Foo")));
    }
}
