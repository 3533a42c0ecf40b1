//! HelpIntentHandler

use crate::domain::localization::keys;
use crate::domain::skill::{HandlerError, HandlerInput, SkillRequest, SkillResponse};
use crate::ports::RequestHandler;

pub const HELP_INTENT: &str = "AMAZON.HelpIntent";

/// Explains what the skill can do and waits for an answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelpIntentHandler;

impl RequestHandler for HelpIntentHandler {
    fn can_handle(&self, request: &SkillRequest) -> bool {
        request.is_intent(HELP_INTENT)
    }

    fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError> {
        let speech = input.t(keys::HELP_MESSAGE)?;
        Ok(SkillResponse::builder()
            .speak(&speech)
            .reprompt(speech)
            .build())
    }

    fn name(&self) -> &'static str {
        "HelpIntentHandler"
    }
}
