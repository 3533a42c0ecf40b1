//! Error types for the request pipeline.

use std::fmt;
use thiserror::Error;

use super::request::RequestType;
use crate::domain::localization::LocalizationError;

/// Failure raised by a handler, an interceptor or the error handler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandlerError {
    #[error("Localization failed: {0}")]
    Localization(#[from] LocalizationError),

    #[error("No translator bound to the request")]
    TranslatorUnbound,

    #[error("No content available for language '{language}'")]
    ContentUnavailable { language: String },

    #[error("{0}")]
    Failed(String),
}

impl HandlerError {
    pub fn failed(message: impl Into<String>) -> Self {
        HandlerError::Failed(message.into())
    }
}

/// Stage of the pipeline an interceptor runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterceptorStage {
    Request,
    Response,
}

impl fmt::Display for InterceptorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterceptorStage::Request => "request",
            InterceptorStage::Response => "response",
        };
        write!(f, "{}", s)
    }
}

/// Every way a dispatch cycle can fail before reaching the error handler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("No handler matched {request_type} (intent: {})", .intent_name.as_deref().unwrap_or("none"))]
    NoHandlerMatched {
        request_type: RequestType,
        intent_name: Option<String>,
    },

    #[error("Handler '{handler}' failed: {source}")]
    HandlerFailure {
        handler: String,
        #[source]
        source: HandlerError,
    },

    #[error("{stage} interceptor '{interceptor}' failed: {source}")]
    InterceptorFailure {
        interceptor: String,
        stage: InterceptorStage,
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// Stable code used in structured log records.
    pub fn code(&self) -> &'static str {
        match self {
            DispatchError::NoHandlerMatched { .. } => "NO_HANDLER_MATCHED",
            _ if matches!(self.handler_error(), Some(HandlerError::Localization(_))) => {
                "LOCALIZATION_CONFIG_ERROR"
            }
            DispatchError::HandlerFailure { .. } => "HANDLER_FAILURE",
            DispatchError::InterceptorFailure { .. } => "INTERCEPTOR_FAILURE",
        }
    }

    /// Underlying handler-level error, if any.
    pub fn handler_error(&self) -> Option<&HandlerError> {
        match self {
            DispatchError::NoHandlerMatched { .. } => None,
            DispatchError::HandlerFailure { source, .. }
            | DispatchError::InterceptorFailure { source, .. } => Some(source),
        }
    }
}
