//! Build errors for the monitor builder.

use crate::core::InvalidThresholds;
use thiserror::Error;

/// Errors that can occur when building a monitor.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Warning level not specified. Call .warning_level(value) before .build()")]
    MissingWarningLevel,

    #[error("Emergency level not specified. Call .emergency_level(value) before .build()")]
    MissingEmergencyLevel,

    #[error(transparent)]
    InvalidThresholds(#[from] InvalidThresholds),
}
