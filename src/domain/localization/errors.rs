//! Localization error types

use thiserror::Error;

/// Errors raised while resolving or translating localized strings.
///
/// Every variant is a configuration problem: the content shipped with the
/// skill does not cover what a handler asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizationError {
    #[error("Message key '{key}' is missing for language '{language}'")]
    MissingKey { language: String, key: String },

    #[error("Language '{language}' is not present in the translation table")]
    MissingLanguage { language: String },

    #[error("Invalid translation table: {0}")]
    InvalidTable(String),
}

impl LocalizationError {
    pub fn missing_key(language: impl Into<String>, key: impl Into<String>) -> Self {
        LocalizationError::MissingKey {
            language: language.into(),
            key: key.into(),
        }
    }

    pub fn missing_language(language: impl Into<String>) -> Self {
        LocalizationError::MissingLanguage {
            language: language.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_message_names_language_and_key() {
        let err = LocalizationError::missing_key("es", "HELLO_MESSAGE");
        let message = err.to_string();
        assert!(message.contains("es"));
        assert!(message.contains("HELLO_MESSAGE"));
    }
}
