//! Widget configuration.
//!
//! Every field has a default matching the marketing site's markup, so an empty
//! JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::{MAX_RESULTS, MIN_QUERY_CHARS};

const DEFAULT_SUMMARY_CHARS: usize = 100;
const DEFAULT_EMPTY_MESSAGE: &str = "No results found";

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Element ids the widget binds to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    pub search_input: String,
    pub search_results: String,
    pub search_wrapper: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            search_input: "searchInput".to_string(),
            search_results: "searchResults".to_string(),
            search_wrapper: "searchWrapper".to_string(),
        }
    }
}

/// Search widget settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub elements: ElementIds,
    /// Queries shorter than this do not constrain the text match
    pub min_query_chars: usize,
    /// Dropdown row limit
    pub max_results: usize,
    /// Description characters kept before the ellipsis
    pub summary_chars: usize,
    /// Shown when nothing matches
    pub empty_message: String,
    pub theme: ThemeMode,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            min_query_chars: MIN_QUERY_CHARS,
            max_results: MAX_RESULTS,
            summary_chars: DEFAULT_SUMMARY_CHARS,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            theme: ThemeMode::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the widget cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::InvalidConfig(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.empty_message.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "empty_message must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = WidgetConfig::default();
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(config.max_results, 5);
        assert_eq!(config.summary_chars, 100);
        assert_eq!(config.elements.search_input, "searchInput");
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(WidgetConfig::from_json("{}").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = WidgetConfig::from_json(
            r#"{"max_results": 3, "theme": "dark", "elements": {"search_input": "q"}}"#,
        )
        .unwrap();
        assert_eq!(config.max_results, 3);
        assert!(config.theme.is_dark());
        assert_eq!(config.elements.search_input, "q");
        assert_eq!(config.elements.search_results, "searchResults");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            WidgetConfig::from_json(r#"{"max_result": 3}"#),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn zero_max_results_is_invalid() {
        assert!(matches!(
            WidgetConfig::from_json(r#"{"max_results": 0}"#),
            Err(Error::InvalidConfig(_))
        ));
    }
}
