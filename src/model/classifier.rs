//! Classifier trait and the linear-softmax model.

use serde::{Deserialize, Serialize};

/// Number of input features: sepal length/width, petal length/width.
pub const FEATURE_COUNT: usize = 4;

/// Labels for the classes the service knows how to name, by class index.
pub const CLASS_LABELS: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Map a class index to its label. Indices outside the table are reported
/// as "Unknown" rather than failing the request.
pub fn label_for_index(index: usize) -> &'static str {
    CLASS_LABELS.get(index).copied().unwrap_or("Unknown")
}

/// Index of the highest probability; ties resolve to the lowest index.
pub fn argmax(probabilities: &[f64]) -> usize {
    let mut best = 0;
    for (i, p) in probabilities.iter().enumerate().skip(1) {
        if *p > probabilities[best] {
            best = i;
        }
    }
    best
}

/// Failures during model invocation.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("non-finite score for class {class}")]
    NonFinite { class: usize },
}

/// A probability classifier over a fixed-order 4-feature row.
///
/// Implementations must be safe to call concurrently: inference reads only
/// model parameters, never per-request scratch state.
pub trait Classifier: Send + Sync {
    /// One probability per class, summing to 1.
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, InferenceError>;
}

/// Multinomial linear model with a softmax over per-class scores.
///
/// The artifact is JSON: one coefficient row per class (in training feature
/// order) plus one intercept per class.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoftmaxClassifier {
    pub coefficients: Vec<[f64; FEATURE_COUNT]>,
    pub intercepts: Vec<f64>,
}

impl SoftmaxClassifier {
    pub fn class_count(&self) -> usize {
        self.coefficients.len()
    }
}

impl Classifier for SoftmaxClassifier {
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, InferenceError> {
        let mut scores = Vec::with_capacity(self.coefficients.len());
        for (class, (row, intercept)) in self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .enumerate()
        {
            let score = row
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
                + intercept;
            if !score.is_finite() {
                return Err(InferenceError::NonFinite { class });
            }
            scores.push(score);
        }

        // Softmax with max subtraction for numeric stability.
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        Ok(exps.into_iter().map(|e| e / sum).collect())
    }
}
