//! HTTP DTOs for the skill endpoint.
//!
//! The wire format follows the voice platform's JSON envelope. These types
//! decouple it from the domain request and response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::application::DispatchOutcome;
use crate::domain::foundation::RequestId;
use crate::domain::skill::{RequestType, SessionAttributes, SkillRequest};

/// Envelope version emitted in every response.
pub const RESPONSE_VERSION: &str = "1.0";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Inbound platform envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<SessionDto>,
    pub request: RequestDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub request_id: Option<String>,
    /// Carried through as sent; platforms differ on offset formatting.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentDto {
    #[serde(default)]
    pub name: Option<String>,
}

/// Envelope rejected before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("Request type must not be empty")]
    MissingRequestType,

    #[error("IntentRequest is missing an intent name")]
    MissingIntentName,
}

impl EnvelopeError {
    pub fn code(&self) -> &'static str {
        match self {
            EnvelopeError::MissingRequestType => "MISSING_REQUEST_TYPE",
            EnvelopeError::MissingIntentName => "MISSING_INTENT_NAME",
        }
    }
}

impl RequestEnvelope {
    /// Normalizes the envelope into the domain request and the session
    /// attributes to dispatch with.
    ///
    /// A missing or blank locale becomes `fallback_locale`. A missing request
    /// id is generated. Intent names are only kept for intent requests.
    pub fn into_domain(
        self,
        fallback_locale: &str,
    ) -> Result<(SkillRequest, SessionAttributes), EnvelopeError> {
        let request = self.request;
        if request.request_type.trim().is_empty() {
            return Err(EnvelopeError::MissingRequestType);
        }
        let request_type = RequestType::from_wire(&request.request_type);

        let intent_name = match request_type {
            RequestType::Intent => {
                let name = request
                    .intent
                    .and_then(|intent| intent.name)
                    .filter(|name| !name.trim().is_empty())
                    .ok_or(EnvelopeError::MissingIntentName)?;
                Some(name)
            }
            _ => None,
        };

        let id = request
            .request_id
            .filter(|id| !id.is_empty())
            .map(RequestId::from_wire)
            .unwrap_or_default();

        let locale = request
            .locale
            .filter(|locale| !locale.trim().is_empty())
            .unwrap_or_else(|| fallback_locale.to_string());

        let attributes = self
            .session
            .and_then(|session| session.attributes)
            .map(SessionAttributes::from)
            .unwrap_or_default();

        Ok((
            SkillRequest::new(id, request_type, intent_name, locale),
            attributes,
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Outbound platform envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: SessionAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub ssml: String,
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self {
            speech_type: "SSML".to_string(),
            ssml: wrap_ssml(text),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl ResponseEnvelope {
    pub fn from_outcome(outcome: DispatchOutcome, user_agent: Option<&str>) -> Self {
        let response = &outcome.response;
        Self {
            version: RESPONSE_VERSION.to_string(),
            user_agent: user_agent.map(str::to_string),
            response: ResponseBody {
                output_speech: response.speech_text().map(OutputSpeech::ssml),
                reprompt: response.reprompt_text().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                should_end_session: response.should_end_session(),
            },
            session_attributes: outcome.session_attributes,
        }
    }
}

/// Wraps plain text in `<speak>` tags unless it already is SSML.
pub fn wrap_ssml(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("<speak>") && trimmed.ends_with("</speak>") {
        trimmed.to_string()
    } else {
        format!("<speak>{}</speak>", trimmed)
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skill::SkillResponse;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> RequestEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn intent_envelope_becomes_domain_request() {
        let (request, attributes) = envelope(json!({
            "version": "1.0",
            "session": { "sessionId": "s-1", "new": false, "attributes": { "count": 2 } },
            "request": {
                "type": "IntentRequest",
                "requestId": "req-42",
                "timestamp": "2024-05-01T10:00:00Z",
                "locale": "es-ES",
                "intent": { "name": "CuriosidadIntent" }
            }
        }))
        .into_domain("en-US")
        .unwrap();

        assert_eq!(request.id().as_str(), "req-42");
        assert_eq!(*request.request_type(), RequestType::Intent);
        assert_eq!(request.intent_name(), Some("CuriosidadIntent"));
        assert_eq!(request.locale(), "es-ES");
        assert_eq!(attributes.get("count"), Some(&json!(2)));
    }

    #[test]
    fn missing_locale_and_id_are_filled_in() {
        let (request, attributes) = envelope(json!({
            "request": { "type": "LaunchRequest" }
        }))
        .into_domain("en-GB")
        .unwrap();

        assert_eq!(request.locale(), "en-GB");
        assert!(!request.id().as_str().is_empty());
        assert!(attributes.is_empty());
    }

    #[test]
    fn intent_without_name_is_rejected() {
        let result = envelope(json!({
            "request": { "type": "IntentRequest", "locale": "en-US", "intent": {} }
        }))
        .into_domain("en-US");
        assert_eq!(result.unwrap_err(), EnvelopeError::MissingIntentName);

        let result = envelope(json!({
            "request": { "type": "IntentRequest", "locale": "en-US" }
        }))
        .into_domain("en-US");
        assert_eq!(result.unwrap_err(), EnvelopeError::MissingIntentName);
    }

    #[test]
    fn intent_name_is_dropped_for_non_intent_requests() {
        let (request, _) = envelope(json!({
            "request": { "type": "LaunchRequest", "intent": { "name": "Stray" } }
        }))
        .into_domain("en-US")
        .unwrap();
        assert_eq!(request.intent_name(), None);
    }

    #[test]
    fn unknown_request_type_is_kept() {
        let (request, _) = envelope(json!({
            "request": { "type": "CanFulfillIntentRequest" }
        }))
        .into_domain("en-US")
        .unwrap();
        assert_eq!(
            *request.request_type(),
            RequestType::Other("CanFulfillIntentRequest".to_string())
        );
    }

    #[test]
    fn response_envelope_serializes_ssml_and_reprompt() {
        let outcome = DispatchOutcome {
            response: SkillResponse::builder().speak("Hello").reprompt("Again?").build(),
            session_attributes: SessionAttributes::new(),
            handled_by: Some("Test"),
            error: None,
        };
        let value =
            serde_json::to_value(ResponseEnvelope::from_outcome(outcome, Some("agent/1"))).unwrap();

        assert_eq!(
            value,
            json!({
                "version": "1.0",
                "sessionAttributes": {},
                "userAgent": "agent/1",
                "response": {
                    "outputSpeech": { "type": "SSML", "ssml": "<speak>Hello</speak>" },
                    "reprompt": {
                        "outputSpeech": { "type": "SSML", "ssml": "<speak>Again?</speak>" }
                    },
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn empty_response_carries_no_speech() {
        let outcome = DispatchOutcome {
            response: SkillResponse::empty(),
            session_attributes: SessionAttributes::new(),
            handled_by: None,
            error: None,
        };
        let value = serde_json::to_value(ResponseEnvelope::from_outcome(outcome, None)).unwrap();

        assert_eq!(value["response"], json!({ "shouldEndSession": true }));
        assert!(value.get("userAgent").is_none());
    }

    #[test]
    fn wrap_ssml_does_not_double_wrap() {
        assert_eq!(wrap_ssml("Hi"), "<speak>Hi</speak>");
        assert_eq!(wrap_ssml("<speak>Hi</speak>"), "<speak>Hi</speak>");
    }
}
