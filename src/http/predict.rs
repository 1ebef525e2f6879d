//! Prediction endpoint.
//!
//! Per-request flow: the JSON boundary rejects malformed bodies before this
//! handler runs (client error, distinct from runtime failures); an absent
//! model short-circuits to 503; the model call runs inside a named
//! `model_inference` span; the outcome is logged with the request's trace id.

use std::time::Instant;

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info_span;

use crate::error::ServiceError;
use crate::http::server::AppState;
use crate::model::{argmax, label_for_index, FEATURE_COUNT};
use crate::observability::trace::TraceId;

/// Input features. All four fields are required.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictionInput {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl PredictionInput {
    /// Fixed-order feature row matching training column order.
    pub fn as_row(&self) -> [f64; FEATURE_COUNT] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }

    /// JSON cannot encode NaN or infinities, so parsed bodies are already
    /// finite; the check keeps the invariant explicit at the seam.
    fn validate(&self) -> Result<(), ServiceError> {
        if self.as_row().iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(ServiceError::Validation(
                "all features must be finite numbers".to_string(),
            ))
        }
    }
}

/// Prediction response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    pub prediction_index: usize,
    pub confidence: f64,
}

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Json(input): Json<PredictionInput>,
) -> Result<Json<PredictionResult>, ServiceError> {
    input.validate()?;

    // Not ready is "try later", not a bug: 503, no prediction event logged.
    let model = state
        .model
        .load_full()
        .ok_or(ServiceError::ModelUnavailable)?;

    let span = info_span!("model_inference", trace_id = %trace_id);
    let _guard = span.enter();
    let start = Instant::now();

    let probabilities = match model.predict_proba(&input.as_row()) {
        Ok(probabilities) => probabilities,
        Err(e) => {
            tracing::error!(
                event = "prediction_error",
                trace_id = %trace_id,
                input = ?input,
                error = %e,
                "Prediction failed"
            );
            return Err(ServiceError::Inference(e));
        }
    };

    let prediction_index = argmax(&probabilities);
    let result = PredictionResult {
        prediction: label_for_index(prediction_index).to_string(),
        prediction_index,
        confidence: round_to(probabilities[prediction_index], 4),
    };
    let latency_ms = round_to(start.elapsed().as_secs_f64() * 1000.0, 2);

    tracing::info!(
        event = "prediction",
        trace_id = %trace_id,
        input = ?input,
        prediction = %result.prediction,
        prediction_index = result.prediction_index,
        confidence = result.confidence,
        latency_ms = latency_ms,
        status = "success",
        "Prediction successful"
    );

    Ok(Json(result))
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
