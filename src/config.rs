//! Serializable monitor configuration.

use crate::builder::{BuildError, MonitorBuilder};
use crate::core::{InvalidThresholds, Thresholds};
use crate::monitor::{FailurePolicy, SensorMonitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse monitor config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] InvalidThresholds),
}

/// Monitor settings: the two levels and the failure policy.
///
/// # Example
///
/// ```rust
/// use thermowatch::config::MonitorConfig;
/// use thermowatch::monitor::FailurePolicy;
///
/// let config = MonitorConfig::from_json(
///     r#"{"warning_level": 20.0, "emergency_level": 75.0, "failure_policy": "isolate_and_log"}"#,
/// )
/// .unwrap();
///
/// let monitor = config.build_monitor().unwrap();
/// assert_eq!(monitor.policy(), FailurePolicy::IsolateAndLog);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    pub warning_level: f64,
    pub emergency_level: f64,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            warning_level: Thresholds::DEFAULT_WARNING_LEVEL,
            emergency_level: Thresholds::DEFAULT_EMERGENCY_LEVEL,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl MonitorConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.thresholds()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn thresholds(&self) -> Result<Thresholds, InvalidThresholds> {
        Thresholds::new(self.warning_level, self.emergency_level)
    }

    /// Builder preloaded with these settings.
    pub fn builder(&self) -> MonitorBuilder {
        MonitorBuilder::new()
            .warning_level(self.warning_level)
            .emergency_level(self.emergency_level)
            .failure_policy(self.failure_policy)
    }

    pub fn build_monitor(&self) -> Result<SensorMonitor, BuildError> {
        self.builder().build()
    }
}
