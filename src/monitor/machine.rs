//! Sensor monitor that classifies samples and dispatches transition events.

use super::error::MonitorError;
use super::policy::FailurePolicy;
use super::stop::StopHandle;
use crate::core::{AlertLevel, MonitorState, TemperatureSample, Thresholds};
use crate::events::{
    DispatchContext, EventKind, HandlerResult, SubscriptionId, SubscriptionRegistry,
    TransitionEvent,
};
use crate::source::TemperatureSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

/// Identity of a monitor instance, attached to its log output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonitorId(Uuid);

impl MonitorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MonitorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MonitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Totals for one call to [`SensorMonitor::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Samples classified
    pub samples: usize,

    pub warnings: usize,
    pub emergencies: usize,
    pub fell_below: usize,

    /// Subscriber failures logged under [`FailurePolicy::IsolateAndLog`]
    pub isolated_failures: usize,

    /// Whether the run ended on a stop request rather than exhaustion
    pub stopped: bool,

    /// Level after the last processed sample
    pub final_level: AlertLevel,
}

impl RunSummary {
    /// Events emitted of `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::ReachedWarning => self.warnings,
            EventKind::ReachedEmergency => self.emergencies,
            EventKind::FellBelowWarning => self.fell_below,
        }
    }

    /// Events emitted of any kind.
    pub fn events(&self) -> usize {
        self.warnings + self.emergencies + self.fell_below
    }

    fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::ReachedWarning => self.warnings += 1,
            EventKind::ReachedEmergency => self.emergencies += 1,
            EventKind::FellBelowWarning => self.fell_below += 1,
        }
    }
}

/// Threshold monitor for a single sensor.
///
/// Owns the hysteresis state and the subscription registry. Samples are
/// processed strictly one at a time: each sample is classified, the new
/// state is committed, and only then is the resulting event (at most one)
/// handed to its subscribers in subscription order. The next sample is not
/// read until every handler has returned.
///
/// State carries over between calls to [`run`](Self::run).
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use thermowatch::events::EventKind;
/// use thermowatch::monitor::SensorMonitor;
/// use thermowatch::source::Readings;
///
/// let mut monitor = SensorMonitor::with_levels(20.0, 75.0).unwrap();
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// for kind in EventKind::ALL {
///     let seen = Arc::clone(&seen);
///     monitor.subscribe(kind, move |event| {
///         seen.lock().unwrap().push(event.kind());
///         Ok(())
///     });
/// }
///
/// let summary = monitor.run(&mut Readings::new(vec![16.0, 30.0, 80.0, 10.0])).unwrap();
///
/// assert_eq!(summary.samples, 4);
/// assert_eq!(
///     *seen.lock().unwrap(),
///     vec![
///         EventKind::ReachedWarning,
///         EventKind::ReachedEmergency,
///         EventKind::FellBelowWarning,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct SensorMonitor {
    id: MonitorId,
    thresholds: Thresholds,
    policy: FailurePolicy,
    state: MonitorState,
    registry: SubscriptionRegistry,
    stop: StopHandle,
}

impl SensorMonitor {
    /// Create a monitor in the `Normal` state with no subscribers.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            id: MonitorId::new(),
            thresholds,
            policy: FailurePolicy::default(),
            state: MonitorState::new(),
            registry: SubscriptionRegistry::new(),
            stop: StopHandle::new(),
        }
    }

    /// Validate raw levels and create a monitor.
    pub fn with_levels(warning_level: f64, emergency_level: f64) -> Result<Self, MonitorError> {
        let thresholds = Thresholds::new(warning_level, emergency_level)?;
        Ok(Self::new(thresholds))
    }

    /// Set the subscriber failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn id(&self) -> MonitorId {
        self.id
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Level after the most recent sample.
    pub fn level(&self) -> AlertLevel {
        self.state.level()
    }

    /// Handle that stops [`run`](Self::run) before its next sample.
    ///
    /// The run that honours a request clears it, so a later `run` resumes
    /// from the current state.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Register a handler for events of `kind`.
    pub fn subscribe<F>(&mut self, kind: EventKind, mut handler: F) -> SubscriptionId
    where
        F: FnMut(&TransitionEvent) -> HandlerResult + Send + 'static,
    {
        self.registry.subscribe(
            kind,
            Box::new(move |event: &TransitionEvent, _: &mut DispatchContext| handler(event)),
        )
    }

    /// Register a handler that can also manage subscriptions mid-run.
    pub fn subscribe_with_context<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&TransitionEvent, &mut DispatchContext) -> HandlerResult + Send + 'static,
    {
        self.registry.subscribe(kind, Box::new(handler))
    }

    /// Remove a subscription. Unknown handles are ignored and return `false`.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.registry.unsubscribe(id)
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.registry.count(kind)
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.registry.contains(id)
    }

    pub fn has_subscribers(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Drain `source`, classifying each sample and dispatching events.
    ///
    /// Returns when the source is exhausted or a stop is requested. A stop
    /// request is consumed here, so it ends exactly one run. An empty source
    /// completes immediately. A failed read aborts the run.
    /// A failing subscriber aborts it too under [`FailurePolicy::Abort`].
    /// The hysteresis state reflects every sample classified before the
    /// error.
    pub fn run<S>(&mut self, source: &mut S) -> Result<RunSummary, MonitorError>
    where
        S: TemperatureSource + ?Sized,
    {
        let span = info_span!(
            "monitor.run",
            monitor_id = %self.id,
            warning_level = self.thresholds.warning_level(),
            emergency_level = self.thresholds.emergency_level(),
            policy = ?self.policy
        );
        let _entered = span.enter();

        info!("Monitor started");
        let mut summary = RunSummary::default();

        loop {
            if self.stop.take() {
                info!(samples = summary.samples, "Stop requested");
                summary.stopped = true;
                break;
            }

            let sample = match source.next_sample() {
                None => break,
                Some(Ok(sample)) => sample,
                Some(Err(error)) => {
                    warn!(index = summary.samples, %error, "Temperature source failed");
                    return Err(MonitorError::SourceExhaustedUnexpectedly {
                        index: summary.samples,
                        source: error,
                    });
                }
            };

            self.process(sample, &mut summary)?;
        }

        summary.final_level = self.state.level();
        info!(
            samples = summary.samples,
            events = summary.events(),
            isolated_failures = summary.isolated_failures,
            final_level = summary.final_level.name(),
            "Monitor finished"
        );
        Ok(summary)
    }

    fn process(
        &mut self,
        sample: TemperatureSample,
        summary: &mut RunSummary,
    ) -> Result<(), MonitorError> {
        // Commit before dispatch so a failing handler cannot desync the flag.
        let (classification, next) = self.state.observe(sample.value(), &self.thresholds);
        self.state = next;
        summary.samples += 1;

        debug!(
            value = sample.value(),
            timestamp = %sample.timestamp(),
            classification = classification.name(),
            level = next.level().name(),
            "Sample classified"
        );

        let Some(kind) = EventKind::from_classification(classification) else {
            return Ok(());
        };

        let event = TransitionEvent::new(kind, &sample);
        summary.record(kind);
        debug!(
            kind = kind.name(),
            value = event.value(),
            subscribers = self.registry.count(kind),
            "Transition event"
        );

        let mut context = DispatchContext::new(self.id, self.stop.clone());
        let stop_on_failure = self.policy.stops_on_failure();
        let report = self.registry.dispatch(&event, &mut context, stop_on_failure);
        debug!(
            kind = kind.name(),
            delivered = report.delivered,
            "Event dispatched"
        );

        for (subscription, error) in report.failures {
            match self.policy {
                FailurePolicy::Abort => {
                    warn!(
                        kind = kind.name(),
                        %subscription,
                        %error,
                        "Subscriber failed, aborting run"
                    );
                    return Err(MonitorError::SubscriberFailure {
                        kind,
                        subscription,
                        source: error,
                    });
                }
                FailurePolicy::IsolateAndLog => {
                    warn!(
                        kind = kind.name(),
                        %subscription,
                        %error,
                        "Subscriber failed, continuing"
                    );
                    summary.isolated_failures += 1;
                }
            }
        }

        Ok(())
    }
}
