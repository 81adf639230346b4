//! Wiring between a monitor and its cooling and emergency sinks.

use super::alert::AlertLog;
use super::cooling::CoolingMechanism;
use super::emergency::EmergencyEscalation;
use crate::events::{EventKind, SubscriptionId};
use crate::monitor::SensorMonitor;
use std::sync::Arc;
use tracing::debug;

/// Subscriptions installed by [`Thermostat::attach`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wiring {
    subscriptions: Vec<SubscriptionId>,
}

impl Wiring {
    pub(crate) fn new(subscriptions: Vec<SubscriptionId>) -> Self {
        Self { subscriptions }
    }

    pub fn subscriptions(&self) -> &[SubscriptionId] {
        &self.subscriptions
    }

    /// Remove every subscription from `monitor`. Returns how many were
    /// still registered.
    pub fn detach(self, monitor: &mut SensorMonitor) -> usize {
        self.subscriptions
            .into_iter()
            .filter(|id| monitor.unsubscribe(*id))
            .count()
    }
}

/// Reacts to monitor events by driving cooling and escalation.
///
/// - `ReachedWarning`: cooling on
/// - `ReachedEmergency`: cooling on, then escalate
/// - `FellBelowWarning`: cooling off
///
/// An [`AlertLog`] is attached alongside unless alerts are disabled. Its
/// handlers are subscribed first, so each alert is logged before the
/// actuation it describes.
pub struct Thermostat {
    cooling: Arc<dyn CoolingMechanism>,
    emergency: Arc<dyn EmergencyEscalation>,
    alerts: Option<AlertLog>,
}

impl Thermostat {
    pub fn new(
        cooling: Arc<dyn CoolingMechanism>,
        emergency: Arc<dyn EmergencyEscalation>,
    ) -> Self {
        Self {
            cooling,
            emergency,
            alerts: Some(AlertLog::new()),
        }
    }

    /// Announce through `alerts` instead of a private log.
    pub fn with_alerts(mut self, alerts: AlertLog) -> Self {
        self.alerts = Some(alerts);
        self
    }

    /// Skip alert logging; actuation still happens.
    pub fn without_alerts(mut self) -> Self {
        self.alerts = None;
        self
    }

    /// Subscribe one actuation handler per event kind on `monitor`, plus the
    /// alert log's handlers when alerts are enabled.
    pub fn attach(&self, monitor: &mut SensorMonitor) -> Wiring {
        let mut subscriptions = match &self.alerts {
            Some(alerts) => alerts.attach(monitor).subscriptions,
            None => Vec::with_capacity(EventKind::ALL.len()),
        };

        for kind in EventKind::ALL {
            let cooling = Arc::clone(&self.cooling);
            let emergency = Arc::clone(&self.emergency);

            let id = monitor.subscribe(kind, move |event| {
                match event.kind() {
                    EventKind::ReachedWarning => cooling.activate(),
                    EventKind::ReachedEmergency => {
                        cooling.activate();
                        emergency.escalate();
                    }
                    EventKind::FellBelowWarning => cooling.deactivate(),
                }
                Ok(())
            });
            subscriptions.push(id);
        }

        debug!(monitor_id = %monitor.id(), "Thermostat attached");
        Wiring::new(subscriptions)
    }

    /// Remove everything `attach` installed. Returns how many were removed.
    pub fn detach(monitor: &mut SensorMonitor, wiring: Wiring) -> usize {
        wiring.detach(monitor)
    }
}

impl std::fmt::Debug for Thermostat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thermostat")
            .field("cooling_active", &self.cooling.is_active())
            .field("alerts", &self.alerts.is_some())
            .finish()
    }
}
