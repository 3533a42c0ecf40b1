//! Request and response logging interceptors.

use tracing::{debug, info};

use crate::domain::skill::{HandlerError, HandlerInput, SkillResponse};
use crate::ports::{RequestInterceptor, ResponseInterceptor};

/// Logs every inbound request together with the configured user agent.
#[derive(Debug, Default, Clone)]
pub struct LoggingRequestInterceptor {
    user_agent: Option<String>,
}

impl LoggingRequestInterceptor {
    pub fn new(user_agent: Option<String>) -> Self {
        Self { user_agent }
    }
}

impl RequestInterceptor for LoggingRequestInterceptor {
    fn process(&self, input: &mut HandlerInput) -> Result<(), HandlerError> {
        let request = input.request();
        info!(
            request_id = %request.id(),
            request_type = %request.request_type(),
            intent = request.intent_name().unwrap_or("-"),
            locale = %request.locale(),
            user_agent = self.user_agent.as_deref().unwrap_or("-"),
            "Incoming request"
        );
        debug!(
            session_attributes = input.session_attributes().len(),
            "Session state"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LoggingRequestInterceptor"
    }
}

/// Logs the response produced by the handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingResponseInterceptor;

impl ResponseInterceptor for LoggingResponseInterceptor {
    fn process(
        &self,
        input: &mut HandlerInput,
        response: &SkillResponse,
    ) -> Result<(), HandlerError> {
        info!(
            request_id = %input.request().id(),
            speech = response.speech_text().unwrap_or("-"),
            reprompt = response.reprompt_text().is_some(),
            should_end_session = response.should_end_session(),
            "Outgoing response"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LoggingResponseInterceptor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skill::{SessionAttributes, SkillRequest};

    #[test]
    fn logging_never_fails_or_mutates() {
        let mut input = HandlerInput::new(
            SkillRequest::intent("HelloWorldIntent", "en-US"),
            SessionAttributes::new(),
        );
        let response = SkillResponse::builder().speak("Hi").build();

        LoggingRequestInterceptor::new(Some("sample/hello-world/v1.2".to_string()))
            .process(&mut input)
            .unwrap();
        LoggingResponseInterceptor.process(&mut input, &response).unwrap();

        assert!(input.session_attributes().is_empty());
        assert!(input.translator().is_none());
    }
}
