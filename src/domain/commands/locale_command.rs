//! Locale inspection command implementation.

use serde_json::Value;

use crate::domain::codec::{
    Codec, CountryAlpha2Codec, CountryAlpha3Codec, LanguageAlpha2Codec, LanguageAlpha3Codec,
};
use crate::domain::{Call, CallError, Command, CommandMeta, CommandResult, Locale, LocaleProvider};

/// Resolves the caller's locale and reports its ISO codes.
pub struct LocaleCommand {
    meta: CommandMeta,
    provider: LocaleProvider,
}

impl LocaleCommand {
    /// Create a new LocaleCommand.
    pub fn new(meta: CommandMeta, provider: LocaleProvider) -> Self {
        Self { meta, provider }
    }
}

impl Command for LocaleCommand {
    fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    fn execute(&self, call: &Call, result: &mut CommandResult) -> Result<(), CallError> {
        let locale = self.provider.resolve(&call.context)?;
        result.insert("locale".to_string(), Value::from(locale.to_string()));

        // codes the locale lacks or the tables do not know are left out
        let codes: [(&str, &dyn Codec<Locale, String>); 4] = [
            ("language", &LanguageAlpha2Codec),
            ("country", &CountryAlpha2Codec),
            ("language3", &LanguageAlpha3Codec),
            ("country3", &CountryAlpha3Codec),
        ];
        for (key, codec) in codes {
            if let Ok(code) = codec.encode(&locale) {
                result.insert(key.to_string(), Value::from(code));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> LocaleCommand {
        LocaleCommand::new(
            CommandMeta::new("locale"),
            LocaleProvider::new(Locale::language_only("en")),
        )
    }

    #[test]
    fn test_reports_call_locale_codes() {
        let mut result = CommandResult::new();
        command()
            .execute(&Call::new("locale").with_locale("de_DE"), &mut result)
            .unwrap();

        assert_eq!(result.get("locale"), Some(&Value::from("de_DE")));
        assert_eq!(result.get("language"), Some(&Value::from("de")));
        assert_eq!(result.get("country"), Some(&Value::from("DE")));
        assert_eq!(result.get("language3"), Some(&Value::from("deu")));
        assert_eq!(result.get("country3"), Some(&Value::from("DEU")));
    }

    #[test]
    fn test_falls_back_to_default_locale() {
        let mut result = CommandResult::new();
        command().execute(&Call::new("locale"), &mut result).unwrap();

        assert_eq!(result.get("locale"), Some(&Value::from("en")));
        assert_eq!(result.get("language3"), Some(&Value::from("eng")));
        assert!(result.get("country").is_none());
        assert!(result.get("country3").is_none());
    }

    #[test]
    fn test_numeric_region_and_three_letter_language() {
        let mut result = CommandResult::new();
        command()
            .execute(&Call::new("locale").with_locale("sw_KE"), &mut result)
            .unwrap();
        assert_eq!(result.get("language3"), Some(&Value::from("swa")));
        assert_eq!(result.get("country3"), Some(&Value::from("KEN")));

        let mut result = CommandResult::new();
        command()
            .execute(&Call::new("locale").with_locale("fil_419"), &mut result)
            .unwrap();
        assert_eq!(result.get("locale"), Some(&Value::from("fil_419")));
        assert_eq!(result.get("language3"), Some(&Value::from("fil")));
        assert!(result.get("language").is_none());
        assert!(result.get("country").is_none());
        assert!(result.get("country3").is_none());
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        let mut result = CommandResult::new();
        let err = command()
            .execute(&Call::new("locale").with_locale("???"), &mut result)
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_argument");
    }
}
