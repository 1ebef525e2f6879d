//! Request-scoped trace identifiers.

use uuid::Uuid;

/// Header carrying the trace id on requests and responses.
pub const X_TRACE_ID: &str = "x-trace-id";

/// 128-bit trace id, rendered as 32 lowercase hex characters.
///
/// Scoped to one inbound request: every log record, span, and error body
/// emitted for that request carries the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(String);

impl TraceId {
    /// Mint a fresh id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Accept an inherited id if it is exactly 32 lowercase hex characters.
    pub fn parse(value: &str) -> Option<Self> {
        let well_formed = value.len() == 32
            && value
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        well_formed.then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
