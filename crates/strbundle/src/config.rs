//! Registry configuration with serde-backed defaults.

use crate::error::{L10nError, L10nResult};
use serde::{Deserialize, Serialize};

/// Locale used as the initial current locale and as the fallback
pub const DEFAULT_LOCALE: &str = "en";

/// Settings applied when a [`Registry`](crate::Registry) is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Locale that `strings()` resolves before any `set_locale` call
    pub initial_locale: String,
    /// Locale whose bundle is returned when the requested one is missing
    pub fallback_locale: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> L10nResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| L10nError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(source: &str) -> L10nResult<Self> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| L10nError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty locale identifiers
    pub fn validate(&self) -> L10nResult<()> {
        if self.initial_locale.is_empty() {
            return Err(L10nError::InvalidConfig(
                "initial_locale must not be empty".to_string(),
            ));
        }
        if self.fallback_locale.is_empty() {
            return Err(L10nError::InvalidConfig(
                "fallback_locale must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_english() {
        let config = RegistryConfig::default();
        assert_eq!(config.initial_locale, "en");
        assert_eq!(config.fallback_locale, "en");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RegistryConfig::from_toml_str(r#"initial_locale = "de""#).unwrap();
        assert_eq!(config.initial_locale, "de");
        assert_eq!(config.fallback_locale, "en");
    }

    #[test]
    fn test_json_config() {
        let config = RegistryConfig::from_json_str(r#"{"fallback_locale": "en-US"}"#).unwrap();
        assert_eq!(config.initial_locale, "en");
        assert_eq!(config.fallback_locale, "en-US");
    }

    #[test]
    fn test_empty_locale_rejected() {
        let err = RegistryConfig::from_toml_str(r#"fallback_locale = """#).unwrap_err();
        assert!(matches!(err, L10nError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(RegistryConfig::from_toml_str("initial_locale = ").is_err());
    }
}
