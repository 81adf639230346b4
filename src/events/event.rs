//! Transition events published by a monitor.

use crate::core::{Classification, TemperatureSample};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of transition a subscriber can listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    /// Sample at or above the warning level (and below emergency).
    ReachedWarning,

    /// Sample at or above the emergency level.
    ReachedEmergency,

    /// First sample below the warning level after an excursion.
    FellBelowWarning,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 3] = [
        EventKind::ReachedWarning,
        EventKind::ReachedEmergency,
        EventKind::FellBelowWarning,
    ];

    /// Get the kind's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReachedWarning => "ReachedWarning",
            Self::ReachedEmergency => "ReachedEmergency",
            Self::FellBelowWarning => "FellBelowWarning",
        }
    }

    /// Event kind produced by a verdict, if any.
    ///
    /// ```rust
    /// use thermowatch::core::Classification;
    /// use thermowatch::events::EventKind;
    ///
    /// assert_eq!(
    ///     EventKind::from_classification(Classification::Warning),
    ///     Some(EventKind::ReachedWarning)
    /// );
    /// assert_eq!(EventKind::from_classification(Classification::NoChange), None);
    /// ```
    pub fn from_classification(classification: Classification) -> Option<Self> {
        match classification {
            Classification::Emergency => Some(Self::ReachedEmergency),
            Classification::Warning => Some(Self::ReachedWarning),
            Classification::BelowWarningAfterWarning => Some(Self::FellBelowWarning),
            Classification::NoChange => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Notification that a sample crossed a classification boundary.
///
/// Carries the triggering sample's value and timestamp. Created once per
/// qualifying sample and handed to each subscriber by reference.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    kind: EventKind,
    value: f64,
    timestamp: DateTime<Utc>,
}

impl TransitionEvent {
    pub fn new(kind: EventKind, sample: &TemperatureSample) -> Self {
        Self {
            kind,
            value: sample.value(),
            timestamp: sample.timestamp(),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Temperature of the triggering sample.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Timestamp of the triggering sample.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Rebuild the triggering sample.
    pub fn sample(&self) -> TemperatureSample {
        TemperatureSample::new(self.value, self.timestamp)
    }
}
