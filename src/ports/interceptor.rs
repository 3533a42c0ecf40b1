//! Interceptor ports - cross-cutting units run around every handler.
//!
//! Interceptors have no predicate: every registered interceptor runs on
//! every request, in registration order.

use crate::domain::skill::{HandlerError, HandlerInput, SkillResponse};

/// Runs before handler selection.
///
/// A failure aborts the cycle; the handler is not invoked and the error
/// handler produces the response instead.
pub trait RequestInterceptor: Send + Sync {
    fn process(&self, input: &mut HandlerInput) -> Result<(), HandlerError>;

    /// Interceptor name for logging and error context.
    fn name(&self) -> &'static str;
}

/// Runs after a handler produced a response.
///
/// The response is read-only; interceptors observe it and may update
/// session attributes.
pub trait ResponseInterceptor: Send + Sync {
    fn process(
        &self,
        input: &mut HandlerInput,
        response: &SkillResponse,
    ) -> Result<(), HandlerError>;

    /// Interceptor name for logging and error context.
    fn name(&self) -> &'static str;
}
