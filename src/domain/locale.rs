//! Locale parsing and per-call locale resolution.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::{CallContext, CallError};

/// Language and country pair, e.g. `de_DE`.
///
/// Either part may be empty, but not both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: String,
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<language>[A-Za-z]{2,3})?(?:[_-](?P<country>[A-Za-z]{2}|[0-9]{3}))?$")
            .expect("Failed to compile locale pattern")
    })
}

impl Locale {
    /// Locale with only a language, lowercased.
    pub fn language_only(language: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: String::new(),
        }
    }

    /// Locale with only a country, uppercased.
    pub fn country_only(country: &str) -> Self {
        Self {
            language: String::new(),
            country: country.to_ascii_uppercase(),
        }
    }

    /// Parse tags such as `de`, `de_DE` or `en-us`.
    pub fn parse(tag: &str) -> Result<Self, CallError> {
        let tag = tag.trim();
        let invalid = || CallError::InvalidArgument(format!("invalid locale '{}'", tag));

        let captures = tag_pattern().captures(tag).ok_or_else(invalid)?;
        let language = captures.name("language").map_or("", |m| m.as_str());
        let country = captures.name("country").map_or("", |m| m.as_str());
        if language.is_empty() && country.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            country: country.to_ascii_uppercase(),
        })
    }

    /// ISO 639 language code, possibly empty.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO 3166 country code, possibly empty.
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl FromStr for Locale {
    type Err = CallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            write!(f, "{}", self.language)
        } else {
            write!(f, "{}_{}", self.language, self.country)
        }
    }
}

/// Resolves the locale of the current call.
#[derive(Debug, Clone)]
pub struct LocaleProvider {
    default: Locale,
}

impl LocaleProvider {
    /// Create a provider falling back to `default`.
    pub fn new(default: Locale) -> Self {
        Self { default }
    }

    /// Locale carried by the call, or the default if none is set.
    pub fn resolve(&self, context: &CallContext) -> Result<Locale, CallError> {
        match context.locale.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => {
                trace!("Found locale {} in call context", value);
                Locale::parse(value)
            }
            _ => {
                trace!("No locale found in call context, using {}", self.default);
                Ok(self.default.clone())
            }
        }
    }
}
