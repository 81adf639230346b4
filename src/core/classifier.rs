//! Pure threshold classification with hysteresis.
//!
//! Classification never performs I/O. It takes the current hysteresis flag
//! and returns the updated one alongside the verdict, so the caller decides
//! when to commit it.

use super::thresholds::Thresholds;
use serde::{Deserialize, Serialize};

/// Verdict for a single sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// `value >= emergency_level`. Takes precedence over `Warning`.
    Emergency,

    /// `warning_level <= value < emergency_level`.
    Warning,

    /// First sample below `warning_level` after having been at or above it.
    BelowWarningAfterWarning,

    /// Below `warning_level` with no pending excursion.
    NoChange,
}

impl Classification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::Warning => "Warning",
            Self::BelowWarningAfterWarning => "BelowWarningAfterWarning",
            Self::NoChange => "NoChange",
        }
    }

    /// Whether this verdict should produce a transition event.
    pub fn is_transition(&self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Classify `value` against `thresholds`.
///
/// Returns the verdict and the new value of the hysteresis flag. Checks run
/// in a fixed order: emergency, then warning, then the falling edge.
/// Emergency and warning samples leave the flag set. Only the first sample
/// below the warning level after an excursion clears it. NaN compares false
/// against both levels and is treated as a sub-warning reading.
///
/// # Example
///
/// ```rust
/// use thermowatch::core::{classify, Classification, Thresholds};
///
/// let thresholds = Thresholds::new(20.0, 75.0).unwrap();
///
/// assert_eq!(classify(16.0, &thresholds, false), (Classification::NoChange, false));
/// assert_eq!(classify(30.0, &thresholds, false), (Classification::Warning, true));
/// assert_eq!(classify(80.0, &thresholds, true), (Classification::Emergency, true));
/// assert_eq!(
///     classify(10.0, &thresholds, true),
///     (Classification::BelowWarningAfterWarning, false)
/// );
/// ```
pub fn classify(
    value: f64,
    thresholds: &Thresholds,
    has_reached_warning: bool,
) -> (Classification, bool) {
    if value >= thresholds.emergency_level() {
        (Classification::Emergency, true)
    } else if value >= thresholds.warning_level() {
        (Classification::Warning, true)
    } else if has_reached_warning {
        (Classification::BelowWarningAfterWarning, false)
    } else {
        (Classification::NoChange, false)
    }
}
