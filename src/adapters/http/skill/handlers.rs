//! HTTP handlers for the skill endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::application::Dispatcher;

use super::dto::{EnvelopeError, ErrorResponse, RequestEnvelope, ResponseEnvelope};

/// Error code for bodies that do not deserialize into an envelope.
pub const INVALID_ENVELOPE: &str = "INVALID_ENVELOPE";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SkillAppState {
    dispatcher: Arc<Dispatcher>,
    fallback_locale: Arc<str>,
    verbose_errors: bool,
}

impl SkillAppState {
    pub fn new(dispatcher: Arc<Dispatcher>, fallback_locale: impl Into<String>) -> Self {
        Self {
            dispatcher,
            fallback_locale: Arc::from(fallback_locale.into()),
            verbose_errors: false,
        }
    }

    /// Include envelope details in 400 responses.
    pub fn with_verbose_errors(mut self, verbose_errors: bool) -> Self {
        self.verbose_errors = verbose_errors;
        self
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /skill - Run one request through the dispatcher
pub async fn invoke_skill(
    State(state): State<SkillAppState>,
    payload: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Response {
    let Json(envelope) = match payload {
        Ok(envelope) => envelope,
        Err(rejection) => return handle_rejection(rejection, state.verbose_errors),
    };
    let request_type = envelope.request.request_type.clone();
    let (request, attributes) = match envelope.into_domain(&state.fallback_locale) {
        Ok(parts) => parts,
        Err(e) => return handle_envelope_error(e, &request_type, state.verbose_errors),
    };

    let outcome = state.dispatcher.dispatch(request, attributes);
    let body = ResponseEnvelope::from_outcome(outcome, state.dispatcher.user_agent());
    (StatusCode::OK, Json(body)).into_response()
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn handle_rejection(rejection: JsonRejection, verbose: bool) -> Response {
    warn!(error = %rejection, "Unreadable request envelope");

    let mut body =
        ErrorResponse::bad_request(INVALID_ENVELOPE, "Request body is not a valid envelope");
    if verbose {
        body = body.with_details(json!({ "reason": rejection.body_text() }));
    }
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn handle_envelope_error(error: EnvelopeError, request_type: &str, verbose: bool) -> Response {
    warn!(error_code = error.code(), request_type, "Rejected request envelope");

    let mut body = ErrorResponse::bad_request(error.code(), error.to_string());
    if verbose {
        body = body.with_details(json!({ "requestType": request_type }));
    }
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
