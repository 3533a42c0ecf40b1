//! HTTP routes for the skill endpoint.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{health, invoke_skill, SkillAppState};

/// Creates the skill router.
///
/// Requests running longer than `request_timeout` are answered with
/// `408 Request Timeout`.
pub fn skill_routes(state: SkillAppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/skill", post(invoke_skill))
        .route("/health", get(health))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
