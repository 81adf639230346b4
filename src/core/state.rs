//! Hysteresis memory and derived alert level of a monitor.

use super::classifier::{classify, Classification};
use super::thresholds::Thresholds;
use serde::{Deserialize, Serialize};

/// Coarse band the sensor was last classified into.
///
/// `Emergency` is sticky: it is only left by a sample that classifies as
/// something else, never by time passing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AlertLevel {
    #[default]
    Normal,
    Warning,
    Emergency,
}

impl AlertLevel {
    /// Get the level's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Warning => "Warning",
            Self::Emergency => "Emergency",
        }
    }

    /// Whether the sensor is at or above the warning level.
    pub fn is_alarm(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// State carried between samples.
///
/// `observe` is pure: it returns the verdict and the next state without
/// touching `self`. The monitor commits the next state before it
/// dispatches anything, so handler failures cannot leave it half-updated.
///
/// # Example
///
/// ```rust
/// use thermowatch::core::{AlertLevel, Classification, MonitorState, Thresholds};
///
/// let thresholds = Thresholds::new(20.0, 75.0).unwrap();
/// let state = MonitorState::new();
///
/// let (verdict, state) = state.observe(30.0, &thresholds);
/// assert_eq!(verdict, Classification::Warning);
/// assert!(state.has_reached_warning());
/// assert_eq!(state.level(), AlertLevel::Warning);
///
/// let (verdict, state) = state.observe(10.0, &thresholds);
/// assert_eq!(verdict, Classification::BelowWarningAfterWarning);
/// assert_eq!(state.level(), AlertLevel::Normal);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonitorState {
    has_reached_warning: bool,
    level: AlertLevel,
}

impl MonitorState {
    /// Initial state: `Normal`, flag cleared.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_reached_warning(&self) -> bool {
        self.has_reached_warning
    }

    pub fn level(&self) -> AlertLevel {
        self.level
    }

    /// Classify `value` and compute the state that follows it.
    pub fn observe(&self, value: f64, thresholds: &Thresholds) -> (Classification, Self) {
        let (classification, has_reached_warning) =
            classify(value, thresholds, self.has_reached_warning);

        let level = match classification {
            Classification::Emergency => AlertLevel::Emergency,
            Classification::Warning => AlertLevel::Warning,
            Classification::BelowWarningAfterWarning => AlertLevel::Normal,
            Classification::NoChange => self.level,
        };

        (
            classification,
            Self {
                has_reached_warning,
                level,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> Thresholds {
        Thresholds::new(20.0, 75.0).unwrap()
    }

    #[test]
    fn initial_state_is_normal() {
        let state = MonitorState::new();

        assert!(!state.has_reached_warning());
        assert_eq!(state.level(), AlertLevel::Normal);
    }

    #[test]
    fn observe_does_not_mutate_receiver() {
        let state = MonitorState::new();
        let (_, next) = state.observe(30.0, &thresholds());

        assert_eq!(state, MonitorState::new());
        assert_ne!(state, next);
    }

    #[test]
    fn emergency_is_sticky_until_reclassified() {
        let (_, state) = MonitorState::new().observe(30.0, &thresholds());
        let (_, state) = state.observe(80.0, &thresholds());
        assert_eq!(state.level(), AlertLevel::Emergency);

        let (verdict, state) = state.observe(50.0, &thresholds());
        assert_eq!(verdict, Classification::Warning);
        assert_eq!(state.level(), AlertLevel::Warning);
    }

    #[test]
    fn leaving_emergency_below_warning_returns_to_normal() {
        let (_, state) = MonitorState::new().observe(80.0, &thresholds());
        let (verdict, state) = state.observe(10.0, &thresholds());

        assert_eq!(verdict, Classification::BelowWarningAfterWarning);
        assert_eq!(state.level(), AlertLevel::Normal);
        assert!(!state.has_reached_warning());
    }

    #[test]
    fn alarm_levels_identified() {
        assert!(!AlertLevel::Normal.is_alarm());
        assert!(AlertLevel::Warning.is_alarm());
        assert!(AlertLevel::Emergency.is_alarm());
    }

    #[test]
    fn level_name_returns_correct_value() {
        assert_eq!(AlertLevel::Normal.name(), "Normal");
        assert_eq!(AlertLevel::Warning.name(), "Warning");
        assert_eq!(AlertLevel::Emergency.name(), "Emergency");
    }
}
