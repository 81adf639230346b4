//! Warning and emergency boundaries for a monitor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Threshold pair rejected at construction.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid thresholds: warning level {warning} must be finite and below emergency level {emergency}")]
pub struct InvalidThresholds {
    pub warning: f64,
    pub emergency: f64,
}

/// Raw, unvalidated levels as they appear in configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct ThresholdLevels {
    warning_level: f64,
    emergency_level: f64,
}

/// Ordered temperature boundaries, `warning_level < emergency_level`.
///
/// The ordering is checked once, in [`Thresholds::new`]. A `Thresholds`
/// value that exists is always valid, including one obtained through
/// deserialization.
///
/// # Example
///
/// ```rust
/// use thermowatch::core::Thresholds;
///
/// let thresholds = Thresholds::new(20.0, 75.0).unwrap();
/// assert_eq!(thresholds.warning_level(), 20.0);
/// assert_eq!(thresholds.emergency_level(), 75.0);
///
/// assert!(Thresholds::new(75.0, 20.0).is_err());
/// assert!(Thresholds::new(50.0, 50.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThresholdLevels", into = "ThresholdLevels")]
pub struct Thresholds {
    warning_level: f64,
    emergency_level: f64,
}

impl Thresholds {
    /// Warning level used by the stock device.
    pub const DEFAULT_WARNING_LEVEL: f64 = 27.0;

    /// Emergency level used by the stock device.
    pub const DEFAULT_EMERGENCY_LEVEL: f64 = 75.0;

    /// Validate and create a threshold pair.
    ///
    /// Both levels must be finite and `warning_level` strictly below
    /// `emergency_level`.
    pub fn new(warning_level: f64, emergency_level: f64) -> Result<Self, InvalidThresholds> {
        let ordered = warning_level.is_finite()
            && emergency_level.is_finite()
            && warning_level < emergency_level;

        if !ordered {
            return Err(InvalidThresholds {
                warning: warning_level,
                emergency: emergency_level,
            });
        }

        Ok(Self {
            warning_level,
            emergency_level,
        })
    }

    pub fn warning_level(&self) -> f64 {
        self.warning_level
    }

    pub fn emergency_level(&self) -> f64 {
        self.emergency_level
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_level: Self::DEFAULT_WARNING_LEVEL,
            emergency_level: Self::DEFAULT_EMERGENCY_LEVEL,
        }
    }
}

impl TryFrom<ThresholdLevels> for Thresholds {
    type Error = InvalidThresholds;

    fn try_from(levels: ThresholdLevels) -> Result<Self, Self::Error> {
        Self::new(levels.warning_level, levels.emergency_level)
    }
}

impl From<Thresholds> for ThresholdLevels {
    fn from(thresholds: Thresholds) -> Self {
        Self {
            warning_level: thresholds.warning_level,
            emergency_level: thresholds.emergency_level,
        }
    }
}
