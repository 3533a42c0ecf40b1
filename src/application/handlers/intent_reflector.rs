//! IntentReflectorHandler - debugging catch-all for intents.
//!
//! Registered after every specific handler so it only sees intents nothing
//! else claimed. It repeats the intent name back to the user.

use crate::domain::localization::keys;
use crate::domain::skill::{HandlerError, HandlerInput, RequestType, SkillRequest, SkillResponse};
use crate::ports::RequestHandler;

#[derive(Debug, Default, Clone, Copy)]
pub struct IntentReflectorHandler;

impl RequestHandler for IntentReflectorHandler {
    fn can_handle(&self, request: &SkillRequest) -> bool {
        *request.request_type() == RequestType::Intent
    }

    fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError> {
        let intent_name = input.request().intent_name().unwrap_or_default().to_string();
        let speech = input.translate(keys::REFLECTOR_MESSAGE, &[intent_name.as_str()])?;
        Ok(SkillResponse::builder().speak(speech).build())
    }

    fn name(&self) -> &'static str {
        "IntentReflectorHandler"
    }
}
