//! SessionEndedRequestHandler
//!
//! The platform sends a session-ended notice when the user walks away or an
//! earlier response ended the conversation. Nothing may be spoken back.

use tracing::info;

use crate::domain::skill::{HandlerError, HandlerInput, RequestType, SkillRequest, SkillResponse};
use crate::ports::RequestHandler;

#[derive(Debug, Default, Clone, Copy)]
pub struct SessionEndedRequestHandler;

impl RequestHandler for SessionEndedRequestHandler {
    fn can_handle(&self, request: &SkillRequest) -> bool {
        *request.request_type() == RequestType::SessionEnded
    }

    fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError> {
        info!(
            request_id = %input.request().id(),
            locale = %input.request().locale(),
            "Session ended"
        );
        Ok(SkillResponse::empty())
    }

    fn name(&self) -> &'static str {
        "SessionEndedRequestHandler"
    }
}
