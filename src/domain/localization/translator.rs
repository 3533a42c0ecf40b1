//! Request-scoped translator.
//!
//! A [`Translator`] is produced per request by [`Translator::resolve`] and
//! carries the language it resolved to. The underlying table is shared
//! read-only; nothing about a translator is global or mutable.

use std::sync::Arc;

use super::errors::LocalizationError;
use super::table::TranslationTable;

/// Positional placeholder filled by [`Translator::translate`].
pub const PLACEHOLDER: &str = "%s";

/// Translation function bound to one resolved language.
#[derive(Debug, Clone)]
pub struct Translator {
    language: String,
    table: Arc<TranslationTable>,
}

impl Translator {
    /// Binds a translator for `locale`.
    ///
    /// The primary language subtag of the locale selects the table entry;
    /// an unknown language falls back to the table's default language.
    pub fn resolve(locale: &str, table: Arc<TranslationTable>) -> Self {
        let requested = primary_language(locale);
        let language = if table.has_language(&requested) {
            requested
        } else {
            table.default_language().to_string()
        };

        Self { language, table }
    }

    /// Language this translator resolved to.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Translates `key`, filling `%s` placeholders from `args` left to right.
    ///
    /// A key absent from the resolved language is a configuration error and
    /// is reported rather than papered over with an empty string.
    pub fn translate(&self, key: &str, args: &[&str]) -> Result<String, LocalizationError> {
        let template = self
            .table
            .template(&self.language, key)
            .ok_or_else(|| LocalizationError::missing_key(&self.language, key))?;

        Ok(fill_placeholders(template, args))
    }

    /// Translates a key that takes no arguments.
    pub fn t(&self, key: &str) -> Result<String, LocalizationError> {
        self.translate(key, &[])
    }
}

/// Extracts the lowercased primary language subtag, e.g. `en` from `en-US`.
pub fn primary_language(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Replaces `%s` placeholders positionally.
///
/// Placeholders beyond the supplied arguments are left as-is and extra
/// arguments are ignored. Substituted text is never rescanned, so an
/// argument that itself contains `%s` is inserted verbatim.
pub fn fill_placeholders(template: &str, args: &[&str]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find(PLACEHOLDER) {
        filled.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => filled.push_str(arg),
            None => filled.push_str(PLACEHOLDER),
        }
        rest = &rest[pos + PLACEHOLDER.len()..];
    }
    filled.push_str(rest);
    filled
}
