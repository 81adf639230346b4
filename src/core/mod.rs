//! Pure classification core.
//!
//! This module contains everything about a reading that can be decided
//! without side effects:
//! - Timestamped samples
//! - Validated warning/emergency thresholds
//! - The hysteresis classifier and the state it carries
//!
//! Nothing in here dispatches events or performs I/O.

mod classifier;
mod sample;
mod state;
mod thresholds;

pub use classifier::{classify, Classification};
pub use sample::TemperatureSample;
pub use state::{AlertLevel, MonitorState};
pub use thresholds::{InvalidThresholds, Thresholds};
