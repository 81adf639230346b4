//! Builder API for monitor construction.
//!
//! Collects levels and policy, validates them once in `build`, and hands
//! back a ready-to-run [`SensorMonitor`].

pub mod error;

pub use error::BuildError;

use crate::core::Thresholds;
use crate::monitor::{FailurePolicy, SensorMonitor};

/// Builder for constructing monitors with a fluent API.
///
/// # Example
///
/// ```
/// use thermowatch::builder::MonitorBuilder;
/// use thermowatch::monitor::FailurePolicy;
///
/// let monitor = MonitorBuilder::new()
///     .warning_level(27.0)
///     .emergency_level(75.0)
///     .failure_policy(FailurePolicy::IsolateAndLog)
///     .build()
///     .unwrap();
///
/// assert_eq!(monitor.thresholds().warning_level(), 27.0);
/// assert_eq!(monitor.policy(), FailurePolicy::IsolateAndLog);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonitorBuilder {
    warning_level: Option<f64>,
    emergency_level: Option<f64>,
    policy: FailurePolicy,
}

impl MonitorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the warning level (required).
    pub fn warning_level(mut self, level: f64) -> Self {
        self.warning_level = Some(level);
        self
    }

    /// Set the emergency level (required).
    pub fn emergency_level(mut self, level: f64) -> Self {
        self.emergency_level = Some(level);
        self
    }

    /// Set both levels from an already validated pair.
    pub fn thresholds(self, thresholds: Thresholds) -> Self {
        self.warning_level(thresholds.warning_level())
            .emergency_level(thresholds.emergency_level())
    }

    /// Set the subscriber failure policy (defaults to abort).
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the monitor.
    /// Returns an error if a level is missing or the levels are out of order.
    pub fn build(self) -> Result<SensorMonitor, BuildError> {
        let warning = self.warning_level.ok_or(BuildError::MissingWarningLevel)?;
        let emergency = self
            .emergency_level
            .ok_or(BuildError::MissingEmergencyLevel)?;

        let thresholds = Thresholds::new(warning, emergency)?;
        Ok(SensorMonitor::new(thresholds).with_policy(self.policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = MonitorBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingWarningLevel)));

        let result = MonitorBuilder::new().warning_level(27.0).build();
        assert!(matches!(result, Err(BuildError::MissingEmergencyLevel)));
    }

    #[test]
    fn builder_rejects_inverted_levels() {
        let result = MonitorBuilder::new()
            .warning_level(80.0)
            .emergency_level(75.0)
            .build();

        assert!(matches!(result, Err(BuildError::InvalidThresholds(_))));
    }

    #[test]
    fn fluent_api_builds_monitor() {
        let monitor = MonitorBuilder::new()
            .thresholds(Thresholds::new(20.0, 75.0).unwrap())
            .build()
            .unwrap();

        assert_eq!(monitor.thresholds().warning_level(), 20.0);
        assert_eq!(monitor.thresholds().emergency_level(), 75.0);
        assert_eq!(monitor.policy(), FailurePolicy::Abort);
        assert!(!monitor.state().has_reached_warning());
    }

    #[test]
    fn error_messages_name_the_missing_call() {
        let message = BuildError::MissingWarningLevel.to_string();
        assert!(message.contains(".warning_level(value)"));
    }
}
