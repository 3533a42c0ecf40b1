//! Outbound response model and its builder.

use serde::Serialize;

/// Normalized response produced by one dispatch cycle.
///
/// `should_end_session` is derived: the session stays open exactly when a
/// reprompt is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillResponse {
    speech_text: Option<String>,
    reprompt_text: Option<String>,
}

impl SkillResponse {
    /// Starts a new response.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// Response without speech, used when the platform ends the session.
    pub fn empty() -> Self {
        Self {
            speech_text: None,
            reprompt_text: None,
        }
    }

    pub fn speech_text(&self) -> Option<&str> {
        self.speech_text.as_deref()
    }

    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt_text.as_deref()
    }

    pub fn should_end_session(&self) -> bool {
        self.reprompt_text.is_none()
    }
}

/// Fluent builder mirroring how handlers compose responses.
#[derive(Debug, Default, Clone)]
pub struct ResponseBuilder {
    speech_text: Option<String>,
    reprompt_text: Option<String>,
}

impl ResponseBuilder {
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.speech_text = Some(text.into());
        self
    }

    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt_text = Some(text.into());
        self
    }

    pub fn build(self) -> SkillResponse {
        SkillResponse {
            speech_text: self.speech_text,
            reprompt_text: self.reprompt_text,
        }
    }
}
