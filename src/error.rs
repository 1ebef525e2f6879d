//! Service error taxonomy.
//!
//! Every failure on the request path is a `ServiceError` variant, translated
//! to an HTTP response in exactly one place. Internal detail (the classifier's
//! actual failure, panic payloads) stays in the logs; clients see a fixed
//! message, plus a trace id on the unhandled path for operator correlation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::model::InferenceError;

/// Failures that can surface from the request path.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request body parsed but carried unusable values.
    #[error("invalid input: {0}")]
    Validation(String),

    /// No model is loaded; the service is not ready to predict.
    #[error("model is not loaded")]
    ModelUnavailable,

    /// The classifier failed during invocation.
    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),

    /// Anything that escaped the handlers; carries the trace id so the
    /// caller can correlate with server-side logs without learning internals.
    #[error("internal server error")]
    Unhandled { trace_id: String },
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": message })),
            )
                .into_response(),
            // 503 so clients can tell "try later" from "bug".
            ServiceError::ModelUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "detail": "Model is not loaded or failed to load. Check server logs."
                })),
            )
                .into_response(),
            ServiceError::Inference(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Prediction failed" })),
            )
                .into_response(),
            ServiceError::Unhandled { trace_id } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Internal Server Error", "trace_id": trace_id })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_unavailable_is_503() {
        let response = ServiceError::ModelUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn inference_error_is_500() {
        let err = ServiceError::Inference(InferenceError::NonFinite { class: 1 });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_is_client_error() {
        let response = ServiceError::Validation("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unhandled_is_500() {
        let err = ServiceError::Unhandled {
            trace_id: "0".repeat(32),
        };
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
