//! Emergency escalation: notify personnel, then shut the device down once.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Capability to escalate an emergency.
///
/// May be called many times in one run (every emergency-level sample
/// escalates). Implementations must make repeated calls safe.
pub trait EmergencyEscalation: Send + Sync {
    fn escalate(&self);
}

/// Hook run when the device is shut down.
pub type ShutdownHook = Box<dyn Fn() + Send + Sync>;

/// Escalation that notifies on every call and shuts down at most once.
#[derive(Default)]
pub struct DeviceShutdown {
    escalations: AtomicUsize,
    shut_down: AtomicBool,
    on_shutdown: Option<ShutdownHook>,
}

impl DeviceShutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` as the shutdown sequence.
    pub fn with_shutdown_hook<F>(hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            on_shutdown: Some(Box::new(hook)),
            ..Self::default()
        }
    }

    /// Number of escalations received.
    pub fn escalation_count(&self) -> usize {
        self.escalations.load(Ordering::SeqCst)
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }
}

impl EmergencyEscalation for DeviceShutdown {
    fn escalate(&self) {
        let escalation = self.escalations.fetch_add(1, Ordering::SeqCst) + 1;
        warn!(escalation, "Sending out notifications to emergency services personnel");

        if self.shut_down.swap(true, Ordering::SeqCst) {
            debug!(escalation, "Device already shut down");
            return;
        }

        warn!("Shutting down device");
        if let Some(hook) = &self.on_shutdown {
            hook();
        }
    }
}

impl std::fmt::Debug for DeviceShutdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceShutdown")
            .field("escalations", &self.escalation_count())
            .field("shut_down", &self.is_shut_down())
            .field("has_hook", &self.on_shutdown.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn first_escalation_shuts_down() {
        let shutdown = DeviceShutdown::new();
        shutdown.escalate();

        assert!(shutdown.is_shut_down());
        assert_eq!(shutdown.escalation_count(), 1);
    }

    #[test]
    fn shutdown_sequence_runs_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let shutdown = DeviceShutdown::with_shutdown_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        shutdown.escalate();
        shutdown.escalate();
        shutdown.escalate();

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(shutdown.escalation_count(), 3);
    }

    #[test]
    fn debug_reports_counters() {
        let shutdown = DeviceShutdown::new();
        shutdown.escalate();

        let rendered = format!("{shutdown:?}");
        assert!(rendered.contains("escalations: 1"));
        assert!(rendered.contains("shut_down: true"));
    }
}
