//! Skill request pipeline domain types.
//!
//! - `request` - inbound request and session attributes
//! - `response` - normalized response and builder
//! - `input` - per-request context passed to handlers and interceptors
//! - `errors` - handler and dispatch failure taxonomy

pub mod errors;
pub mod input;
pub mod request;
pub mod response;

pub use errors::{DispatchError, HandlerError, InterceptorStage};
pub use input::HandlerInput;
pub use request::{RequestType, SessionAttributes, SkillRequest};
pub use response::{ResponseBuilder, SkillResponse};
