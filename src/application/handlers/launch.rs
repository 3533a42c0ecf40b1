//! LaunchRequestHandler - greets the user when the skill opens.

use crate::domain::localization::keys;
use crate::domain::skill::{HandlerError, HandlerInput, RequestType, SkillRequest, SkillResponse};
use crate::ports::RequestHandler;

/// Answers launch requests with the welcome message and keeps the session open.
#[derive(Debug, Default, Clone, Copy)]
pub struct LaunchRequestHandler;

impl RequestHandler for LaunchRequestHandler {
    fn can_handle(&self, request: &SkillRequest) -> bool {
        *request.request_type() == RequestType::Launch
    }

    fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError> {
        let speech = input.t(keys::WELCOME_MESSAGE)?;

        Ok(SkillResponse::builder()
            .speak(&speech)
            .reprompt(speech)
            .build())
    }

    fn name(&self) -> &'static str {
        "LaunchRequestHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::bound_input;

    #[test]
    fn accepts_only_launch_requests() {
        let handler = LaunchRequestHandler;
        assert!(handler.can_handle(&SkillRequest::launch("en-US")));
        assert!(!handler.can_handle(&SkillRequest::intent("HelloWorldIntent", "en-US")));
        assert!(!handler.can_handle(&SkillRequest::session_ended("en-US")));
    }

    #[test]
    fn welcome_is_spoken_and_reprompted() {
        let mut input = bound_input(SkillRequest::launch("en-US"));
        let response = LaunchRequestHandler.handle(&mut input).unwrap();

        let welcome = "Welcome to Gravity Falls Trivia! You can ask for a fun fact or ask for help. What would you like to do?";
        assert_eq!(response.speech_text(), Some(welcome));
        assert_eq!(response.reprompt_text(), Some(welcome));
        assert!(!response.should_end_session());
    }

    #[test]
    fn unbound_translator_is_a_failure() {
        let mut input = HandlerInput::new(
            SkillRequest::launch("en-US"),
            crate::domain::skill::SessionAttributes::new(),
        );
        let result = LaunchRequestHandler.handle(&mut input);
        assert_eq!(result, Err(HandlerError::TranslatorUnbound));
    }
}
