//! FactIntentHandler - tells a random trivia fact.
//!
//! The fact list is chosen by the language the request's translator resolved
//! to, so a locale without its own content gets facts in the same fallback
//! language as the surrounding speech.

use std::sync::Arc;

use tracing::debug;

use crate::domain::localization::keys;
use crate::domain::skill::{HandlerError, HandlerInput, SkillRequest, SkillResponse};
use crate::domain::trivia::{select_index, FactCatalog};
use crate::ports::{RandomSource, RequestHandler};

/// Intent name the fact handler answers by default.
pub const DEFAULT_FACT_INTENT: &str = "CuriosidadIntent";

pub struct FactIntentHandler {
    intent_name: String,
    facts: Arc<FactCatalog>,
    random: Arc<dyn RandomSource>,
}

impl FactIntentHandler {
    pub fn new(
        intent_name: impl Into<String>,
        facts: Arc<FactCatalog>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            intent_name: intent_name.into(),
            facts,
            random,
        }
    }

    pub fn intent_name(&self) -> &str {
        &self.intent_name
    }
}

impl RequestHandler for FactIntentHandler {
    fn can_handle(&self, request: &SkillRequest) -> bool {
        request.is_intent(&self.intent_name)
    }

    fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError> {
        let language = input
            .translator()
            .ok_or(HandlerError::TranslatorUnbound)?
            .language()
            .to_string();

        let facts = self
            .facts
            .facts_for(&language)
            .ok_or_else(|| HandlerError::ContentUnavailable {
                language: language.clone(),
            })?;

        let sample = self.random.next_unit();
        let index = select_index(sample, facts.len()).ok_or_else(|| {
            HandlerError::ContentUnavailable {
                language: language.clone(),
            }
        })?;
        debug!(language = %language, index, "Fact selected");

        let fact = input.translate(keys::RANDOM_FACT, &[facts[index].as_str()])?;
        let prompt = input.t(keys::ANOTHER_FACT_PROMPT)?;

        Ok(SkillResponse::builder()
            .speak(format!("{} {}", fact, prompt))
            .reprompt(prompt)
            .build())
    }

    fn name(&self) -> &'static str {
        "FactIntentHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::SequenceRandomSource;
    use crate::application::handlers::test_support::{bound_input, content};
    use std::collections::HashMap;

    fn handler(sample: f64) -> FactIntentHandler {
        FactIntentHandler::new(
            DEFAULT_FACT_INTENT,
            content().facts,
            Arc::new(SequenceRandomSource::constant(sample)),
        )
    }

    #[test]
    fn accepts_only_the_configured_intent() {
        let handler = handler(0.0);
        assert!(handler.can_handle(&SkillRequest::intent("CuriosidadIntent", "es-ES")));
        assert!(!handler.can_handle(&SkillRequest::intent("HelloWorldIntent", "es-ES")));
        assert!(!handler.can_handle(&SkillRequest::launch("es-ES")));
    }

    #[test]
    fn first_sample_selects_first_fact() {
        let mut input = bound_input(SkillRequest::intent(DEFAULT_FACT_INTENT, "en-US"));
        let response = handler(0.0).handle(&mut input).unwrap();

        assert_eq!(
            response.speech_text(),
            Some("Here's a fun fact about Gravity Falls: Gravity Falls is home to the Mystery Shack, a tourist trap full of strange and paranormal artifacts. Would you like to hear another fun fact about Gravity Falls?")
        );
        assert_eq!(
            response.reprompt_text(),
            Some("Would you like to hear another fun fact about Gravity Falls?")
        );
        assert!(!response.should_end_session());
    }

    #[test]
    fn sample_below_one_selects_last_fact() {
        let mut input = bound_input(SkillRequest::intent(DEFAULT_FACT_INTENT, "es-MX"));
        let response = handler(0.999_999).handle(&mut input).unwrap();

        let speech = response.speech_text().unwrap();
        assert!(speech.contains("Waddles, el cerdo mascota de Mabel"));
    }

    #[test]
    fn fact_precedes_prompt_in_every_language() {
        let content = content();
        for language in content.translations.languages() {
            let locale = format!("{}-XX", language);
            let facts = content.facts.facts_for(language).unwrap();
            for (i, fact) in facts.iter().enumerate() {
                let sample = (i as f64 + 0.5) / facts.len() as f64;
                let mut input = bound_input(SkillRequest::intent(DEFAULT_FACT_INTENT, &locale));
                let response = handler(sample).handle(&mut input).unwrap();

                let speech = response.speech_text().unwrap();
                let prompt = content
                    .translations
                    .template(language, keys::ANOTHER_FACT_PROMPT)
                    .unwrap();
                let fact_at = speech.find(fact.as_str()).expect("fact spoken");
                let prompt_at = speech.rfind(prompt).expect("prompt spoken");
                assert!(fact_at < prompt_at);
            }
        }
    }

    #[test]
    fn unsupported_locale_uses_default_language_facts() {
        let mut input = bound_input(SkillRequest::intent(DEFAULT_FACT_INTENT, "fr-FR"));
        let response = handler(0.0).handle(&mut input).unwrap();
        assert!(response
            .speech_text()
            .unwrap()
            .starts_with("Here's a fun fact about Gravity Falls:"));
    }

    #[test]
    fn language_without_facts_is_content_unavailable() {
        let handler = FactIntentHandler::new(
            DEFAULT_FACT_INTENT,
            Arc::new(FactCatalog::new(HashMap::new())),
            Arc::new(SequenceRandomSource::constant(0.0)),
        );
        let mut input = bound_input(SkillRequest::intent(DEFAULT_FACT_INTENT, "en-US"));

        let result = handler.handle(&mut input);
        assert_eq!(
            result,
            Err(HandlerError::ContentUnavailable {
                language: "en".to_string()
            })
        );
    }
}
