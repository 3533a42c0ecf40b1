//! Translation table: language prefix -> message key -> template.

use std::collections::HashMap;

use super::errors::LocalizationError;

/// Language used when a locale's prefix has no entry in the table.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Immutable per-language string templates.
///
/// Language prefixes are stored lowercased. The default language must be
/// present; this is checked on construction so that resolution can always
/// fall back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    languages: HashMap<String, HashMap<String, String>>,
    default_language: String,
}

impl TranslationTable {
    /// Builds a table with an explicit default language.
    pub fn new(
        languages: HashMap<String, HashMap<String, String>>,
        default_language: impl Into<String>,
    ) -> Result<Self, LocalizationError> {
        let default_language = default_language.into().to_ascii_lowercase();
        if default_language.is_empty() {
            return Err(LocalizationError::InvalidTable(
                "default language cannot be empty".to_string(),
            ));
        }

        let languages: HashMap<String, HashMap<String, String>> = languages
            .into_iter()
            .map(|(language, templates)| (language.to_ascii_lowercase(), templates))
            .collect();

        if !languages.contains_key(&default_language) {
            return Err(LocalizationError::missing_language(default_language));
        }

        Ok(Self {
            languages,
            default_language,
        })
    }

    /// Builds a table that falls back to [`DEFAULT_LANGUAGE`].
    pub fn with_default_language(
        languages: HashMap<String, HashMap<String, String>>,
    ) -> Result<Self, LocalizationError> {
        Self::new(languages, DEFAULT_LANGUAGE)
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Language prefixes in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Raw template for `key` in `language`, if present.
    pub fn template(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|templates| templates.get(key))
            .map(String::as_str)
    }

    /// Keys defined for the default language but absent from `language`, sorted.
    pub fn missing_keys(&self, language: &str) -> Vec<&str> {
        let Some(defaults) = self.languages.get(&self.default_language) else {
            return Vec::new();
        };
        let target = self.languages.get(language);

        let mut missing: Vec<&str> = defaults
            .keys()
            .filter(|key| target.map_or(true, |templates| !templates.contains_key(*key)))
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing
    }
}
