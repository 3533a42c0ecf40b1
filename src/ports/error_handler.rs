//! ErrorHandler port - turns a failed cycle into a response.

use crate::domain::skill::{DispatchError, HandlerError, HandlerInput, SkillResponse};

/// Converts any dispatch failure into the final response.
///
/// Implementations are expected to succeed. The `Result` exists so that a
/// broken error handler (for example one whose own message is missing from
/// the translation table) can be detected; the dispatcher then answers with
/// a fixed fallback response instead.
///
/// The input may carry no translator when a request interceptor failed
/// before localization completed.
pub trait ErrorHandler: Send + Sync {
    fn handle(
        &self,
        input: &HandlerInput,
        error: &DispatchError,
    ) -> Result<SkillResponse, HandlerError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}
