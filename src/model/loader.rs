//! Model artifact loading from disk.

use std::fs;
use std::path::Path;

use crate::model::classifier::SoftmaxClassifier;

/// Error type for model loading. A load failure leaves the service
/// permanently not-ready; the operator restarts the process.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("model file unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("model file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model shape invalid: {0}")]
    Shape(String),
}

/// Load and shape-check a serialized classifier.
pub fn load_classifier(path: &Path) -> Result<SoftmaxClassifier, LoadError> {
    let content = fs::read_to_string(path)?;
    let model: SoftmaxClassifier = serde_json::from_str(&content)?;

    if model.coefficients.is_empty() {
        return Err(LoadError::Shape("no coefficient rows".to_string()));
    }
    if model.intercepts.len() != model.coefficients.len() {
        return Err(LoadError::Shape(format!(
            "{} intercepts for {} classes",
            model.intercepts.len(),
            model.class_count()
        )));
    }

    Ok(model)
}
