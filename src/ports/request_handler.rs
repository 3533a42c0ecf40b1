//! RequestHandler port - a unit that can answer some requests.

use crate::domain::skill::{HandlerError, HandlerInput, SkillRequest, SkillResponse};

/// Handler selected by first-match over registration order.
///
/// Implementations should be:
/// - **Pure in `can_handle`** - the predicate looks only at the request
///   type and intent name, so selection is deterministic
/// - **Specific before generic** - a handler whose predicate overlaps a later
///   one shadows it for those inputs
///
/// # Example
///
/// ```ignore
/// struct LaunchRequestHandler;
///
/// impl RequestHandler for LaunchRequestHandler {
///     fn can_handle(&self, request: &SkillRequest) -> bool {
///         *request.request_type() == RequestType::Launch
///     }
///
///     fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError> {
///         let speech = input.t(keys::WELCOME_MESSAGE)?;
///         Ok(SkillResponse::builder().speak(&speech).reprompt(speech).build())
///     }
///
///     fn name(&self) -> &'static str {
///         "LaunchRequestHandler"
///     }
/// }
/// ```
pub trait RequestHandler: Send + Sync {
    /// Whether this handler answers `request`.
    fn can_handle(&self, request: &SkillRequest) -> bool;

    /// Produces the response for a request this handler accepted.
    fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, HandlerError>;

    /// Handler name for logging and error context.
    fn name(&self) -> &'static str;
}
