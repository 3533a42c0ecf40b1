//! HelloWorldIntentHandler

use crate::domain::localization::keys;
use crate::domain::skill::{HandlerError, HandlerInput, SkillRequest, SkillResponse};
use crate::ports::RequestHandler;

pub const HELLO_WORLD_INTENT: &str = "HelloWorldIntent";

/// Says hello and ends the session.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelloWorldIntentHandler;

impl RequestHandler for HelloWorldIntentHandler {
    fn can_handle(&self, request: &SkillRequest) -> bool {
        request.is_intent(HELLO_WORLD_INTENT)
    }

    fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError> {
        let speech = input.t(keys::HELLO_MESSAGE)?;
        Ok(SkillResponse::builder().speak(speech).build())
    }

    fn name(&self) -> &'static str {
        "HelloWorldIntentHandler"
    }
}
