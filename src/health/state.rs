//! Service readiness state machine.
//!
//! # States
//! - NotReady: process is up, model not (yet) loaded
//! - Ready: startup load succeeded, predictions can be served
//!
//! # State Transitions
//! ```text
//! NotReady → Ready: startup loader publishes the model (at most once)
//! ```
//!
//! There is no transition back: a failed load is permanent for the process
//! lifetime. The alive flag is never cleared in this design; the probe's
//! error branch exists but is unreachable in practice.

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide liveness/readiness flags, write-once-then-read-many.
#[derive(Debug)]
pub struct ReadinessState {
    alive: AtomicBool,
    ready: AtomicBool,
}

impl ReadinessState {
    /// Process start: alive, not ready.
    pub fn new() -> Self {
        Self {
            alive: AtomicBool::new(true),
            ready: AtomicBool::new(false),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Mark the service ready. Called once by the startup loader, after the
    /// model handle has been published.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
        tracing::info!("Service marked ready");
    }
}

impl Default for ReadinessState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_alive_and_not_ready() {
        let state = ReadinessState::new();
        assert!(state.is_alive());
        assert!(!state.is_ready());
    }

    #[test]
    fn ready_after_mark() {
        let state = ReadinessState::new();
        state.mark_ready();
        assert!(state.is_ready());
        assert!(state.is_alive());
    }
}
