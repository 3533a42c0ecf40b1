//! Inbound request model.
//!
//! A `SkillRequest` is the validated projection of the transport envelope.
//! It is built once per turn and never mutated by the pipeline; the only
//! mutable per-turn state is the [`SessionAttributes`] bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::domain::foundation::RequestId;

/// Kind of request delivered by the voice platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    /// The user opened the skill without a specific intent.
    Launch,
    /// The user spoke an utterance resolved upstream into a named intent.
    Intent,
    /// The platform closed the session.
    SessionEnded,
    /// Any other platform event, carried by its wire name.
    Other(String),
}

impl RequestType {
    /// Maps a wire type name (`LaunchRequest`, `IntentRequest`, ...) to a request type.
    pub fn from_wire(name: &str) -> Self {
        match name {
            "LaunchRequest" => RequestType::Launch,
            "IntentRequest" => RequestType::Intent,
            "SessionEndedRequest" => RequestType::SessionEnded,
            other => RequestType::Other(other.to_string()),
        }
    }

    /// Returns the wire type name.
    pub fn as_wire(&self) -> &str {
        match self {
            RequestType::Launch => "LaunchRequest",
            RequestType::Intent => "IntentRequest",
            RequestType::SessionEnded => "SessionEndedRequest",
            RequestType::Other(name) => name,
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Immutable request handed through one dispatch cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRequest {
    id: RequestId,
    request_type: RequestType,
    intent_name: Option<String>,
    locale: String,
}

impl SkillRequest {
    pub fn new(
        id: RequestId,
        request_type: RequestType,
        intent_name: Option<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            id,
            request_type,
            intent_name,
            locale: locale.into(),
        }
    }

    /// Shorthand for a launch request.
    pub fn launch(locale: impl Into<String>) -> Self {
        Self::new(RequestId::new(), RequestType::Launch, None, locale)
    }

    /// Shorthand for an intent request.
    pub fn intent(name: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::new(
            RequestId::new(),
            RequestType::Intent,
            Some(name.into()),
            locale,
        )
    }

    /// Shorthand for a session-ended request.
    pub fn session_ended(locale: impl Into<String>) -> Self {
        Self::new(RequestId::new(), RequestType::SessionEnded, None, locale)
    }

    pub fn id(&self) -> &RequestId {
        &self.id
    }

    pub fn request_type(&self) -> &RequestType {
        &self.request_type
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.intent_name.as_deref()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// True when this is an intent request for exactly `name`.
    pub fn is_intent(&self, name: &str) -> bool {
        self.request_type == RequestType::Intent && self.intent_name.as_deref() == Some(name)
    }

    /// True when this is an intent request for any of `names`.
    pub fn is_any_intent(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.is_intent(name))
    }
}

/// Opaque session attributes owned by the transport.
///
/// Handlers and interceptors may read and write entries during one cycle;
/// the transport persists the result and supplies it again on the next turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionAttributes(Map<String, Value>);

impl SessionAttributes {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for SessionAttributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_map_to_request_types() {
        assert_eq!(RequestType::from_wire("LaunchRequest"), RequestType::Launch);
        assert_eq!(RequestType::from_wire("IntentRequest"), RequestType::Intent);
        assert_eq!(
            RequestType::from_wire("SessionEndedRequest"),
            RequestType::SessionEnded
        );
        assert_eq!(
            RequestType::from_wire("CanFulfillIntentRequest"),
            RequestType::Other("CanFulfillIntentRequest".to_string())
        );
    }

    #[test]
    fn wire_name_round_trips_for_other() {
        let other = RequestType::from_wire("Display.ElementSelected");
        assert_eq!(other.as_wire(), "Display.ElementSelected");
    }

    #[test]
    fn is_intent_requires_intent_type() {
        let request = SkillRequest::intent("HelloWorldIntent", "en-US");
        assert!(request.is_intent("HelloWorldIntent"));
        assert!(!request.is_intent("AMAZON.HelpIntent"));

        let launch = SkillRequest::new(
            RequestId::new(),
            RequestType::Launch,
            Some("HelloWorldIntent".to_string()),
            "en-US",
        );
        assert!(!launch.is_intent("HelloWorldIntent"));
    }

    #[test]
    fn is_any_intent_matches_alternatives() {
        let request = SkillRequest::intent("AMAZON.StopIntent", "en-US");
        assert!(request.is_any_intent(&["AMAZON.CancelIntent", "AMAZON.StopIntent"]));
        assert!(!request.is_any_intent(&["AMAZON.HelpIntent"]));
    }

    #[test]
    fn session_attributes_serialize_transparently() {
        let mut attributes = SessionAttributes::new();
        attributes.insert("facts_heard", json!(2));

        let value = serde_json::to_value(&attributes).unwrap();
        assert_eq!(value, json!({ "facts_heard": 2 }));
        assert_eq!(attributes.len(), 1);
    }
}
