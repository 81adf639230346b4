//! The stateful shell around the pure classifier.
//!
//! [`SensorMonitor`] pulls samples from a source, commits the hysteresis
//! state for each one, and fans transition events out to subscribers.
//! How subscriber failures are treated is chosen with [`FailurePolicy`].

mod error;
mod machine;
mod policy;
mod stop;

pub use error::MonitorError;
pub use machine::{MonitorId, RunSummary, SensorMonitor};
pub use policy::FailurePolicy;
pub use stop::StopHandle;
