//! Localization domain module
//!
//! Resolves a request locale against a table of per-language templates and
//! produces a request-scoped [`Translator`].
//!
//! # Example
//!
//! ```ignore
//! let translator = Translator::resolve("es-ES", Arc::clone(&table));
//! let speech = translator.translate(keys::REFLECTOR_MESSAGE, &["HelloWorldIntent"])?;
//! ```

pub mod errors;
pub mod keys;
pub mod table;
pub mod translator;

pub use errors::LocalizationError;
pub use table::{TranslationTable, DEFAULT_LANGUAGE};
pub use translator::{fill_placeholders, primary_language, Translator, PLACEHOLDER};
