//! Skill configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::handlers::DEFAULT_FACT_INTENT;
use crate::application::{SkillOptions, DEFAULT_USER_AGENT};
use crate::domain::localization::DEFAULT_LANGUAGE;

/// Skill behavior and content sources
#[derive(Debug, Clone, Deserialize)]
pub struct SkillConfig {
    /// Custom user agent advertised in responses; empty disables it
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Language used when a request's language has no translations
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Locale assumed when an inbound request carries none
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,

    /// YAML file with message templates; bundled content when unset
    pub strings_path: Option<PathBuf>,

    /// YAML file with trivia facts; bundled content when unset
    pub facts_path: Option<PathBuf>,

    /// Intent name answered with a random fact
    #[serde(default = "default_fact_intent")]
    pub fact_intent: String,
}

impl SkillConfig {
    /// Validate skill configuration
    pub fn validate(&self, bundled_content: bool) -> Result<(), ValidationError> {
        if self.default_language.trim().is_empty() {
            return Err(ValidationError::EmptyDefaultLanguage);
        }
        if !is_well_formed_locale(&self.fallback_locale) {
            return Err(ValidationError::InvalidFallbackLocale(
                self.fallback_locale.clone(),
            ));
        }
        if self.fact_intent.trim().is_empty() {
            return Err(ValidationError::EmptyFactIntent);
        }
        if !bundled_content {
            if self.strings_path.is_none() {
                return Err(ValidationError::MissingRequired("skill.strings_path"));
            }
            if self.facts_path.is_none() {
                return Err(ValidationError::MissingRequired("skill.facts_path"));
            }
        }
        Ok(())
    }

    /// User agent, or `None` when configured empty
    pub fn user_agent(&self) -> Option<&str> {
        let trimmed = self.user_agent.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            default_language: default_language(),
            fallback_locale: default_fallback_locale(),
            strings_path: None,
            facts_path: None,
            fact_intent: default_fact_intent(),
        }
    }
}

impl From<&SkillConfig> for SkillOptions {
    fn from(config: &SkillConfig) -> Self {
        Self {
            fact_intent: config.fact_intent.clone(),
            user_agent: config.user_agent().map(str::to_string),
        }
    }
}

/// `ll` or `ll-RR` / `ll_RR`, letters only.
fn is_well_formed_locale(locale: &str) -> bool {
    let mut parts = locale.split(['-', '_']);
    let head_ok = parts
        .next()
        .map(|head| !head.is_empty() && head.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false);
    let rest_ok =
        parts.all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
    head_ok && rest_ok
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_fallback_locale() -> String {
    "en-US".to_string()
}

fn default_fact_intent() -> String {
    DEFAULT_FACT_INTENT.to_string()
}
