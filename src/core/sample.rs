//! Timestamped temperature readings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single temperature reading.
///
/// Samples are immutable values: the reading and the instant it was taken.
/// No unit conversion is applied to `value`.
///
/// # Example
///
/// ```rust
/// use thermowatch::core::TemperatureSample;
/// use chrono::Utc;
///
/// let taken_at = Utc::now();
/// let sample = TemperatureSample::new(28.7, taken_at);
///
/// assert_eq!(sample.value(), 28.7);
/// assert_eq!(sample.timestamp(), taken_at);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSample {
    value: f64,
    timestamp: DateTime<Utc>,
}

impl TemperatureSample {
    /// Create a sample taken at `timestamp`.
    pub fn new(value: f64, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }

    /// Create a sample stamped with the current time.
    pub fn now(value: f64) -> Self {
        Self::new(value, Utc::now())
    }

    /// The sensed temperature.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// When the reading was taken.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
