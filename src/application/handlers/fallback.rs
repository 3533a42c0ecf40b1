//! FallbackIntentHandler - the platform's "didn't understand" intent.

use crate::domain::localization::keys;
use crate::domain::skill::{HandlerError, HandlerInput, SkillRequest, SkillResponse};
use crate::ports::RequestHandler;

pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackIntentHandler;

impl RequestHandler for FallbackIntentHandler {
    fn can_handle(&self, request: &SkillRequest) -> bool {
        request.is_intent(FALLBACK_INTENT)
    }

    fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError> {
        let speech = input.t(keys::FALLBACK_MESSAGE)?;
        Ok(SkillResponse::builder()
            .speak(&speech)
            .reprompt(speech)
            .build())
    }

    fn name(&self) -> &'static str {
        "FallbackIntentHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::bound_input;

    #[test]
    fn fallback_reprompts() {
        let mut input = bound_input(SkillRequest::intent(FALLBACK_INTENT, "es-US"));
        let response = FallbackIntentHandler.handle(&mut input).unwrap();

        let fallback = "Lo siento, no sé nada sobre eso. Por favor, intenta pedir un dato curioso sobre Gravity Falls.";
        assert_eq!(response.speech_text(), Some(fallback));
        assert_eq!(response.reprompt_text(), Some(fallback));
    }
}
