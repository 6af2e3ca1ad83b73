//! Storefront configuration.

use crate::error::CommerceError;
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the shopper and locale containers and the search box.
///
/// Every field has a default, so a config file only needs to name what it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Prefix of every persisted key.
    pub namespace: String,

    /// Maximum length of the recently-viewed list.
    pub recently_viewed_cap: usize,

    /// Maximum number of remembered search terms.
    pub recent_search_cap: usize,

    /// Maximum number of products in the compare list.
    pub compare_cap: usize,

    /// Maximum number of live search suggestions.
    pub suggestion_limit: usize,

    /// Minimum query length (in characters) before suggestions appear.
    pub suggestion_min_chars: usize,

    /// Locale used until the shopper picks one.
    pub default_locale: Locale,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: "bazaar".to_string(),
            recently_viewed_cap: 8,
            recent_search_cap: 5,
            compare_cap: 4,
            suggestion_limit: 5,
            suggestion_min_chars: 2,
            default_locale: Locale::Uz,
        }
    }
}

impl StoreConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            serde_json::from_str(&content).map_err(|e| {
                CommerceError::Config(format!("failed to parse {}: {}", path.display(), e))
            })
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse TOML config text.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.namespace, "bazaar");
        assert_eq!(config.recently_viewed_cap, 8);
        assert_eq!(config.recent_search_cap, 5);
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.suggestion_min_chars, 2);
        assert_eq!(config.default_locale, Locale::Uz);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StoreConfig::from_toml_str(
            r#"
            recently_viewed_cap = 3
            default_locale = "ru"
            "#,
        )
        .unwrap();
        assert_eq!(config.recently_viewed_cap, 3);
        assert_eq!(config.default_locale, Locale::Ru);
        assert_eq!(config.recent_search_cap, 5);
        assert_eq!(config.namespace, "bazaar");
    }

    #[test]
    fn test_unknown_locale_in_toml_is_error() {
        let err = StoreConfig::from_toml_str(r#"default_locale = "fr""#).unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"namespace": "shop", "compare_cap": 2}}"#).unwrap();

        let config = StoreConfig::load(file.path()).unwrap();
        assert_eq!(config.namespace, "shop");
        assert_eq!(config.compare_cap, 2);
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "suggestion_limit = 3").unwrap();

        let config = StoreConfig::load(file.path()).unwrap();
        assert_eq!(config.suggestion_limit, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = StoreConfig::load("/nonexistent/bazaar.toml").unwrap_err();
        assert!(matches!(err, CommerceError::Config(_)));
    }
}
