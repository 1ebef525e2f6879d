//! Request-path middleware.
//!
//! Layer order matters (outermost first):
//! ```text
//! timing:          clock starts before everything, header set on every exit
//! trace_context:   id must exist before the error translator can log it
//! catch_unhandled: converts escaped panics into the uniform error body
//! handlers
//! ```

pub mod catch_unhandled;
pub mod timing;
pub mod trace_context;
