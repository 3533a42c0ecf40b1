//! HTTP adapter for the skill endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    wrap_ssml, EnvelopeError, ErrorResponse, OutputSpeech, Reprompt, RequestEnvelope,
    ResponseBody, ResponseEnvelope, RESPONSE_VERSION,
};
pub use handlers::{health, invoke_skill, SkillAppState, INVALID_ENVELOPE};
pub use routes::skill_routes;
