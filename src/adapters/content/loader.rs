//! YAML content loader
//!
//! Reads the translation table and the fact catalog from YAML documents.
//! Both files map a language prefix to its content:
//!
//! ```yaml
//! # strings.yaml
//! en:
//!   WELCOME_MESSAGE: "Welcome!"
//!   REFLECTOR_MESSAGE: "You just triggered %s."
//!
//! # facts.yaml
//! en:
//!   - "First fact."
//!   - "Second fact."
//! ```
//!
//! The English and Spanish content of the trivia skill is compiled in and
//! used whenever no file path is configured.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::localization::{LocalizationError, TranslationTable};
use crate::domain::trivia::FactCatalog;

/// Bundled message templates.
pub const BUNDLED_STRINGS: &str = include_str!("../../../content/strings.yaml");

/// Bundled trivia facts.
pub const BUNDLED_FACTS: &str = include_str!("../../../content/facts.yaml");

/// Errors raised while loading skill content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse content: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid translation table: {0}")]
    Localization(#[from] LocalizationError),
}

/// Immutable content shared by every request.
#[derive(Debug, Clone)]
pub struct SkillContent {
    pub translations: Arc<TranslationTable>,
    pub facts: Arc<FactCatalog>,
}

impl SkillContent {
    /// Content compiled into the binary.
    pub fn bundled(default_language: &str) -> Result<Self, ContentError> {
        Ok(Self {
            translations: Arc::new(parse_translations(BUNDLED_STRINGS, default_language)?),
            facts: Arc::new(parse_facts(BUNDLED_FACTS)?),
        })
    }

    /// Loads content from the given files, falling back to the bundled
    /// content for any path that is `None`.
    pub fn load(
        strings_path: Option<&Path>,
        facts_path: Option<&Path>,
        default_language: &str,
    ) -> Result<Self, ContentError> {
        let strings = match strings_path {
            Some(path) => read_file(path)?,
            None => BUNDLED_STRINGS.to_string(),
        };
        let facts = match facts_path {
            Some(path) => read_file(path)?,
            None => BUNDLED_FACTS.to_string(),
        };

        let content = Self {
            translations: Arc::new(parse_translations(&strings, default_language)?),
            facts: Arc::new(parse_facts(&facts)?),
        };
        content.report_gaps();
        Ok(content)
    }

    /// Logs languages whose content is incomplete.
    ///
    /// Gaps are not fatal: a missing key only fails the request that needs it.
    pub fn report_gaps(&self) {
        for language in self.translations.languages() {
            let missing = self.translations.missing_keys(language);
            if !missing.is_empty() {
                warn!(
                    language,
                    missing = ?missing,
                    "Language is missing message keys present in the default language"
                );
            }
            if self.facts.facts_for(language).is_none() {
                warn!(language, "Language has translations but no trivia facts");
            }
        }
        debug!(
            languages = ?self.translations.languages(),
            fact_languages = ?self.facts.languages(),
            "Skill content loaded"
        );
    }
}

/// Parses a `language -> key -> template` document.
pub fn parse_translations(
    yaml: &str,
    default_language: &str,
) -> Result<TranslationTable, ContentError> {
    let languages: HashMap<String, HashMap<String, String>> = serde_yaml::from_str(yaml)?;
    Ok(TranslationTable::new(languages, default_language)?)
}

/// Parses a `language -> [fact]` document.
pub fn parse_facts(yaml: &str) -> Result<FactCatalog, ContentError> {
    let facts: HashMap<String, Vec<String>> = serde_yaml::from_str(yaml)?;
    Ok(FactCatalog::new(facts))
}

fn read_file(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })
}
