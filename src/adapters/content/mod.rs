//! Content Adapters
//!
//! Loads the translation table and trivia facts supplied to the skill at
//! startup, either from YAML files or from the bundled defaults.

mod loader;

pub use loader::{
    parse_facts, parse_translations, ContentError, SkillContent, BUNDLED_FACTS, BUNDLED_STRINGS,
};
