//! Liveness and readiness probe handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::server::AppState;

/// GET /live_check: process liveness, independent of model state.
pub async fn liveness_probe(State(state): State<AppState>) -> Response {
    if state.readiness.is_alive() {
        Json(json!({ "status": "alive" })).into_response()
    } else {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// GET /ready_check: ready iff the startup load succeeded and a model is
/// present. Must stay cheap: no model invocation.
pub async fn readiness_probe(State(state): State<AppState>) -> Response {
    if state.readiness.is_ready() && state.model.load().is_some() {
        Json(json!({ "status": "ready" })).into_response()
    } else {
        StatusCode::SERVICE_UNAVAILABLE.into_response()
    }
}
