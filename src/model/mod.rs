//! Model subsystem.
//!
//! # Data Flow
//! ```text
//! model artifact (JSON)
//!     → loader.rs (read, deserialize, shape checks)
//!     → SoftmaxClassifier (read-only after load)
//!     → published once into the application state at startup
//! ```
//!
//! # Design Decisions
//! - Handlers see only the `Classifier` trait; tests swap in failing models
//! - A failed load is permanent for the process lifetime (no retry, no reload)
//! - Class count may exceed the label table; unknown indices get a fixed label

pub mod classifier;
pub mod loader;

pub use classifier::{
    argmax, label_for_index, Classifier, InferenceError, SoftmaxClassifier, FEATURE_COUNT,
};
pub use loader::{load_classifier, LoadError};
