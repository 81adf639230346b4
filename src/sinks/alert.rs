//! Human-readable alerts derived from transition events.

use super::thermostat::Wiring;
use crate::core::Thresholds;
use crate::events::{EventKind, TransitionEvent};
use crate::monitor::SensorMonitor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

/// How loudly an alert should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Information,
    Warning,
    Emergency,
}

impl Severity {
    pub fn for_kind(kind: EventKind) -> Self {
        match kind {
            EventKind::ReachedWarning => Self::Warning,
            EventKind::ReachedEmergency => Self::Emergency,
            EventKind::FellBelowWarning => Self::Information,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Emergency => "Emergency",
        }
    }
}

/// Presentation-neutral alert for a transition.
///
/// Carries the text a display would show, but no colour or formatting.
///
/// # Example
///
/// ```rust
/// use thermowatch::core::{TemperatureSample, Thresholds};
/// use thermowatch::events::{EventKind, TransitionEvent};
/// use thermowatch::sinks::{Alert, Severity};
///
/// let thresholds = Thresholds::new(27.0, 75.0).unwrap();
/// let event = TransitionEvent::new(EventKind::ReachedEmergency, &TemperatureSample::now(86.45));
/// let alert = Alert::new(&event, &thresholds);
///
/// assert_eq!(alert.severity(), Severity::Emergency);
/// assert!(alert.message().contains("Emergency level is 75 and above"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    severity: Severity,
    kind: EventKind,
    value: f64,
    timestamp: DateTime<Utc>,
    message: String,
}

impl Alert {
    pub fn new(event: &TransitionEvent, thresholds: &Thresholds) -> Self {
        let warning = thresholds.warning_level();
        let emergency = thresholds.emergency_level();
        let value = event.value();

        let message = match event.kind() {
            EventKind::ReachedWarning => format!(
                "Warning alert: temperature {value} reached warning level \
                 (Warning level is between {warning} and {emergency})"
            ),
            EventKind::ReachedEmergency => format!(
                "Emergency alert: temperature {value} reached emergency level \
                 (Emergency level is {emergency} and above)"
            ),
            EventKind::FellBelowWarning => format!(
                "Information alert: temperature {value} fell below warning level \
                 (Warning level is between {warning} and {emergency})"
            ),
        };

        Self {
            severity: Severity::for_kind(event.kind()),
            kind: event.kind(),
            value,
            timestamp: event.timestamp(),
            message,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Emit through `tracing` at a level matching the severity.
    pub fn log(&self) {
        let kind = self.kind.name();
        let timestamp = self.timestamp.to_rfc3339();
        match self.severity {
            Severity::Information => info!(kind, %timestamp, "{}", self.message),
            Severity::Warning => warn!(kind, %timestamp, "{}", self.message),
            Severity::Emergency => error!(kind, %timestamp, "{}", self.message),
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Informational display: logs an [`Alert`] for every transition.
///
/// Independent of actuation, so a monitor can be watched without driving
/// any hardware. Clones share their counters.
#[derive(Clone, Debug, Default)]
pub struct AlertLog {
    logged: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<Alert>>>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every event kind on `monitor`.
    pub fn attach(&self, monitor: &mut SensorMonitor) -> Wiring {
        let thresholds = *monitor.thresholds();
        let subscriptions = EventKind::ALL
            .into_iter()
            .map(|kind| {
                let log = self.clone();
                monitor.subscribe(kind, move |event| {
                    log.record(Alert::new(event, &thresholds));
                    Ok(())
                })
            })
            .collect();

        debug!(monitor_id = %monitor.id(), "Alert log attached");
        Wiring::new(subscriptions)
    }

    /// Alerts logged so far.
    pub fn logged(&self) -> usize {
        self.logged.load(Ordering::SeqCst)
    }

    /// Most recent alert, if any.
    pub fn last_alert(&self) -> Option<Alert> {
        self.last.lock().ok().and_then(|last| last.clone())
    }

    fn record(&self, alert: Alert) {
        alert.log();
        self.logged.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(alert);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TemperatureSample;
    use crate::source::Readings;

    fn alert(kind: EventKind, value: f64) -> Alert {
        let thresholds = Thresholds::new(27.0, 75.0).unwrap();
        Alert::new(
            &TransitionEvent::new(kind, &TemperatureSample::now(value)),
            &thresholds,
        )
    }

    #[test]
    fn severity_follows_kind() {
        assert_eq!(
            Severity::for_kind(EventKind::ReachedWarning),
            Severity::Warning
        );
        assert_eq!(
            Severity::for_kind(EventKind::ReachedEmergency),
            Severity::Emergency
        );
        assert_eq!(
            Severity::for_kind(EventKind::FellBelowWarning),
            Severity::Information
        );
    }

    #[test]
    fn warning_message_describes_band() {
        let alert = alert(EventKind::ReachedWarning, 28.7);

        assert_eq!(
            alert.message(),
            "Warning alert: temperature 28.7 reached warning level \
             (Warning level is between 27 and 75)"
        );
    }

    #[test]
    fn fell_below_message_is_informational() {
        let alert = alert(EventKind::FellBelowWarning, 26.0);

        assert_eq!(alert.severity(), Severity::Information);
        assert!(alert.message().starts_with("Information alert"));
        assert!(alert.to_string().contains("fell below warning level"));
    }

    #[test]
    fn emergency_message_describes_band() {
        let alert = alert(EventKind::ReachedEmergency, 86.45);

        assert_eq!(
            alert.message(),
            "Emergency alert: temperature 86.45 reached emergency level \
             (Emergency level is 75 and above)"
        );
    }

    #[test]
    fn alert_log_attaches_on_its_own() {
        let mut monitor = SensorMonitor::with_levels(27.0, 75.0).unwrap();
        let alerts = AlertLog::new();
        let wiring = alerts.attach(&mut monitor);

        monitor
            .run(&mut Readings::new(vec![16.0, 28.7, 86.45, 26.0]))
            .unwrap();

        assert_eq!(wiring.subscriptions().len(), 3);
        assert_eq!(alerts.logged(), 3);
        let last = alerts.last_alert().unwrap();
        assert_eq!(last.severity(), Severity::Information);
        assert_eq!(last.value(), 26.0);
    }

    #[test]
    fn detached_alert_log_goes_quiet() {
        let mut monitor = SensorMonitor::with_levels(27.0, 75.0).unwrap();
        let alerts = AlertLog::new();
        let wiring = alerts.attach(&mut monitor);

        assert_eq!(wiring.detach(&mut monitor), 3);
        monitor.run(&mut Readings::new(vec![30.0])).unwrap();

        assert_eq!(alerts.logged(), 0);
        assert!(alerts.last_alert().is_none());
    }

    #[test]
    fn alert_keeps_event_data() {
        let alert = alert(EventKind::ReachedEmergency, 86.45);

        assert_eq!(alert.kind(), EventKind::ReachedEmergency);
        assert_eq!(alert.value(), 86.45);
    }
}
