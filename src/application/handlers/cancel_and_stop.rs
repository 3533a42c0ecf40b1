//! CancelAndStopIntentHandler

use crate::domain::localization::keys;
use crate::domain::skill::{HandlerError, HandlerInput, SkillRequest, SkillResponse};
use crate::ports::RequestHandler;

/// Intents that close the conversation.
pub const EXIT_INTENTS: [&str; 3] = [
    "AMAZON.CancelIntent",
    "AMAZON.StopIntent",
    "AMAZON.NavigateHomeIntent",
];

/// Says goodbye and ends the session.
#[derive(Debug, Default, Clone, Copy)]
pub struct CancelAndStopIntentHandler;

impl RequestHandler for CancelAndStopIntentHandler {
    fn can_handle(&self, request: &SkillRequest) -> bool {
        request.is_any_intent(&EXIT_INTENTS)
    }

    fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError> {
        let speech = input.t(keys::GOODBYE_MESSAGE)?;
        Ok(SkillResponse::builder().speak(speech).build())
    }

    fn name(&self) -> &'static str {
        "CancelAndStopIntentHandler"
    }
}
