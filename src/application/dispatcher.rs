//! Dispatcher - runs one request through interceptors, handlers and the
//! error handler.
//!
//! # Pipeline
//!
//! 1. Request interceptors, in registration order. A failure aborts the cycle.
//! 2. First registered handler whose `can_handle` accepts the request.
//! 3. That handler's `handle`.
//! 4. Response interceptors, in registration order.
//! 5. Any failure in 1-4 goes to the error handler, whose response is final.
//!    If the error handler fails too, [`fallback_response`] is returned.
//!
//! A response interceptor failure also routes through the error handler; the
//! response already produced by the handler is discarded.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, info_span};

use crate::domain::skill::{
    DispatchError, HandlerInput, InterceptorStage, SessionAttributes, SkillRequest, SkillResponse,
};
use crate::ports::{ErrorHandler, RequestHandler, RequestInterceptor, ResponseInterceptor};

/// Speech used when the error handler itself fails.
pub const FALLBACK_SPEECH: &str = "Sorry, there was an error. Please try again.";

/// Fixed response for a failed error handler: apology, reprompt, session open.
pub fn fallback_response() -> SkillResponse {
    SkillResponse::builder()
        .speak(FALLBACK_SPEECH)
        .reprompt(FALLBACK_SPEECH)
        .build()
}

/// Errors raised while assembling a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("An error handler must be registered")]
    MissingErrorHandler,

    #[error("At least one request handler must be registered")]
    NoRequestHandlers,
}

/// Result of one dispatch cycle.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Final response for the transport.
    pub response: SkillResponse,
    /// Session attributes after handlers and interceptors ran.
    pub session_attributes: SessionAttributes,
    /// Name of the handler whose response was returned, if one succeeded.
    pub handled_by: Option<&'static str>,
    /// Failure that was routed to the error handler, if any.
    pub error: Option<DispatchError>,
}

/// Ordered request dispatcher.
pub struct Dispatcher {
    request_handlers: Vec<Arc<dyn RequestHandler>>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
    error_handler: Arc<dyn ErrorHandler>,
    user_agent: Option<String>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// Custom user agent advertised by this skill.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Handler names in registration order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.request_handlers.iter().map(|h| h.name()).collect()
    }

    /// First registered handler that accepts `request`.
    pub fn select_handler(&self, request: &SkillRequest) -> Option<&dyn RequestHandler> {
        self.request_handlers
            .iter()
            .find(|handler| handler.can_handle(request))
            .map(|handler| handler.as_ref())
    }

    /// Runs one full cycle. Never fails; every failure becomes a response.
    pub fn dispatch(
        &self,
        request: SkillRequest,
        session_attributes: SessionAttributes,
    ) -> DispatchOutcome {
        let span = info_span!(
            "dispatch",
            request_id = %request.id(),
            request_type = %request.request_type(),
            intent = request.intent_name().unwrap_or(""),
            locale = request.locale(),
        );
        let _guard = span.enter();

        let mut input = HandlerInput::new(request, session_attributes);

        let (response, handled_by, failure) = match self.run_pipeline(&mut input) {
            Ok((handler, response)) => (response, Some(handler), None),
            Err(err) => {
                let response = self.recover(&input, &err);
                (response, None, Some(err))
            }
        };

        info!(
            handled_by = handled_by.unwrap_or(""),
            error_code = failure.as_ref().map(DispatchError::code).unwrap_or(""),
            should_end_session = response.should_end_session(),
            "Dispatch completed"
        );

        DispatchOutcome {
            response,
            session_attributes: input.into_session_attributes(),
            handled_by,
            error: failure,
        }
    }

    fn run_pipeline(
        &self,
        input: &mut HandlerInput,
    ) -> Result<(&'static str, SkillResponse), DispatchError> {
        for interceptor in &self.request_interceptors {
            interceptor
                .process(input)
                .map_err(|source| DispatchError::InterceptorFailure {
                    interceptor: interceptor.name().to_string(),
                    stage: InterceptorStage::Request,
                    source,
                })?;
        }

        let handler = self.select_handler(input.request()).ok_or_else(|| {
            DispatchError::NoHandlerMatched {
                request_type: input.request().request_type().clone(),
                intent_name: input.request().intent_name().map(str::to_string),
            }
        })?;
        debug!(handler = handler.name(), "Handler selected");

        let response = handler
            .handle(input)
            .map_err(|source| DispatchError::HandlerFailure {
                handler: handler.name().to_string(),
                source,
            })?;

        for interceptor in &self.response_interceptors {
            interceptor
                .process(input, &response)
                .map_err(|source| DispatchError::InterceptorFailure {
                    interceptor: interceptor.name().to_string(),
                    stage: InterceptorStage::Response,
                    source,
                })?;
        }

        Ok((handler.name(), response))
    }

    fn recover(&self, input: &HandlerInput, failure: &DispatchError) -> SkillResponse {
        match self.error_handler.handle(input, failure) {
            Ok(response) => response,
            Err(err) => {
                error!(
                    error_handler = self.error_handler.name(),
                    error_code = failure.code(),
                    dispatch_error = %failure,
                    error = %err,
                    "Error handler failed; answering with fallback response"
                );
                fallback_response()
            }
        }
    }
}

/// Assembles a [`Dispatcher`].
///
/// Handlers are tried in the order they are added, so add specific handlers
/// before generic ones.
#[derive(Default)]
pub struct DispatcherBuilder {
    request_handlers: Vec<Arc<dyn RequestHandler>>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
    error_handler: Option<Arc<dyn ErrorHandler>>,
    user_agent: Option<String>,
}

impl DispatcherBuilder {
    pub fn add_request_handler(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.request_handlers.push(handler);
        self
    }

    pub fn add_request_handlers(
        mut self,
        handlers: impl IntoIterator<Item = Arc<dyn RequestHandler>>,
    ) -> Self {
        self.request_handlers.extend(handlers);
        self
    }

    pub fn add_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    pub fn add_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    pub fn with_error_handler(mut self, error_handler: Arc<dyn ErrorHandler>) -> Self {
        self.error_handler = Some(error_handler);
        self
    }

    pub fn with_custom_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<Dispatcher, BuildError> {
        if self.request_handlers.is_empty() {
            return Err(BuildError::NoRequestHandlers);
        }
        let error_handler = self.error_handler.ok_or(BuildError::MissingErrorHandler)?;

        Ok(Dispatcher {
            request_handlers: self.request_handlers,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
            error_handler,
            user_agent: self.user_agent,
        })
    }
}
