//! LocalizationInterceptor - binds the request-scoped translator.

use std::sync::Arc;

use tracing::debug;

use crate::domain::localization::{TranslationTable, Translator};
use crate::domain::skill::{HandlerError, HandlerInput};
use crate::ports::RequestInterceptor;

/// Resolves the request locale against the shared translation table and
/// attaches the resulting [`Translator`] to the input.
///
/// Resolution never fails: an unknown language falls back to the table's
/// default language.
pub struct LocalizationInterceptor {
    translations: Arc<TranslationTable>,
}

impl LocalizationInterceptor {
    pub fn new(translations: Arc<TranslationTable>) -> Self {
        Self { translations }
    }
}

impl RequestInterceptor for LocalizationInterceptor {
    fn process(&self, input: &mut HandlerInput) -> Result<(), HandlerError> {
        let translator =
            Translator::resolve(input.request().locale(), Arc::clone(&self.translations));
        debug!(
            locale = %input.request().locale(),
            language = %translator.language(),
            "Translator bound"
        );
        input.bind_translator(translator);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LocalizationInterceptor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::SkillContent;
    use crate::domain::localization::keys;
    use crate::domain::skill::{SessionAttributes, SkillRequest};

    fn interceptor() -> LocalizationInterceptor {
        let content = SkillContent::bundled("en").unwrap();
        LocalizationInterceptor::new(content.translations)
    }

    fn process(locale: &str) -> HandlerInput {
        let mut input = HandlerInput::new(SkillRequest::launch(locale), SessionAttributes::new());
        interceptor().process(&mut input).unwrap();
        input
    }

    #[test]
    fn binds_translator_for_language_prefix() {
        let input = process("es-MX");
        assert_eq!(input.translator().unwrap().language(), "es");
        assert_eq!(
            input.t(keys::GOODBYE_MESSAGE).unwrap(),
            "¡Adiós y gracias por explorar Gravity Falls conmigo!"
        );
    }

    #[test]
    fn unknown_language_falls_back_to_default() {
        let input = process("de-DE");
        assert_eq!(input.translator().unwrap().language(), "en");
    }

    #[test]
    fn empty_locale_falls_back_to_default() {
        let input = process("");
        assert_eq!(input.translator().unwrap().language(), "en");
    }
}
