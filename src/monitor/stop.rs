//! Cooperative stop signal for long-running monitors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag checked by the monitor between samples.
///
/// Clones share the same flag, so a handle can be moved to another thread
/// (or captured by a subscriber) and used to end a run over an infinite
/// source. A request is consumed by the run it ends, so the next call to
/// `run` starts fresh. [`reset`](Self::reset) withdraws a request that no
/// run has picked up yet.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the monitor stop before reading the next sample.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Withdraw a pending stop request.
    pub fn reset(&self) {
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Clear the flag, returning whether a stop was pending.
    pub(crate) fn take(&self) -> bool {
        self.stopped.swap(false, Ordering::SeqCst)
    }
}
