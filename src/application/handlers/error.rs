//! SkillErrorHandler - the single error handler of the pipeline.
//!
//! Speaks the localized apology and keeps the session open. When the failure
//! happened before the localization interceptor ran, the translator is
//! resolved here from the request locale.

use std::sync::Arc;

use tracing::error;

use crate::domain::localization::{keys, TranslationTable, Translator};
use crate::domain::skill::{DispatchError, HandlerError, HandlerInput, SkillResponse};
use crate::ports::ErrorHandler;

pub struct SkillErrorHandler {
    translations: Arc<TranslationTable>,
}

impl SkillErrorHandler {
    pub fn new(translations: Arc<TranslationTable>) -> Self {
        Self { translations }
    }
}

impl ErrorHandler for SkillErrorHandler {
    fn handle(
        &self,
        input: &HandlerInput,
        failure: &DispatchError,
    ) -> Result<SkillResponse, HandlerError> {
        error!(
            request_id = %input.request().id(),
            error_code = failure.code(),
            error = %failure,
            "Request failed"
        );

        let speech = match input.translator() {
            Some(translator) => translator.t(keys::ERROR_MESSAGE)?,
            None => {
                let locale = input.request().locale();
                Translator::resolve(locale, Arc::clone(&self.translations)).t(keys::ERROR_MESSAGE)?
            }
        };

        Ok(SkillResponse::builder()
            .speak(&speech)
            .reprompt(speech)
            .build())
    }

    fn name(&self) -> &'static str {
        "SkillErrorHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{bound_input, content};
    use crate::domain::skill::{RequestType, SessionAttributes, SkillRequest};
    use std::collections::HashMap;

    fn no_match() -> DispatchError {
        DispatchError::NoHandlerMatched {
            request_type: RequestType::Other("CanFulfillIntentRequest".to_string()),
            intent_name: None,
        }
    }

    #[test]
    fn apologizes_in_bound_language() {
        let input = bound_input(SkillRequest::intent("Broken", "es-ES"));
        let response = SkillErrorHandler::new(content().translations)
            .handle(&input, &no_match())
            .unwrap();

        let apology = "Lo siento, ha habido un problema. Por favor, inténtalo otra vez.";
        assert_eq!(response.speech_text(), Some(apology));
        assert_eq!(response.reprompt_text(), Some(apology));
        assert!(!response.should_end_session());
    }

    #[test]
    fn resolves_translator_when_unbound() {
        let input = HandlerInput::new(SkillRequest::launch("en-AU"), SessionAttributes::new());
        let response = SkillErrorHandler::new(content().translations)
            .handle(&input, &no_match())
            .unwrap();

        assert_eq!(
            response.speech_text(),
            Some("Sorry, there was an error. Please try again.")
        );
    }

    #[test]
    fn missing_apology_template_fails() {
        let mut languages = HashMap::new();
        languages.insert("en".to_string(), HashMap::new());
        let table = Arc::new(TranslationTable::new(languages, "en").unwrap());
        let input = HandlerInput::new(SkillRequest::launch("en-US"), SessionAttributes::new());

        let result = SkillErrorHandler::new(table).handle(&input, &no_match());
        assert!(matches!(result, Err(HandlerError::Localization(_))));
    }
}
