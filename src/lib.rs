//! Thermowatch: a hysteresis-based temperature monitor
//!
//! Thermowatch follows a "pure core, imperative shell" split. Classifying
//! a reading against its thresholds is a pure function. The monitor around
//! it owns the one piece of state (the hysteresis flag) and publishes
//! transition events to decoupled subscribers.
//!
//! # Core Concepts
//!
//! - **Thresholds**: validated `warning < emergency` pair
//! - **Classifier**: maps a sample and the hysteresis flag to a verdict
//! - **Monitor**: drains a source, commits state, dispatches events
//! - **Sinks**: cooling, emergency escalation, and alerting subscribers
//!
//! # Event semantics
//!
//! `ReachedWarning` and `ReachedEmergency` are level-triggered: they fire on
//! every sample in their band. `FellBelowWarning` is edge-triggered: it fires
//! once, on the first sample below the warning level after an excursion.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use thermowatch::builder::MonitorBuilder;
//! use thermowatch::sinks::{CoolingMechanism, CoolingSwitch, DeviceShutdown, Thermostat};
//! use thermowatch::source::Readings;
//!
//! let mut monitor = MonitorBuilder::new()
//!     .warning_level(20.0)
//!     .emergency_level(75.0)
//!     .build()
//!     .unwrap();
//!
//! let cooling = Arc::new(CoolingSwitch::new());
//! let shutdown = Arc::new(DeviceShutdown::new());
//! Thermostat::new(cooling.clone(), shutdown.clone()).attach(&mut monitor);
//!
//! let summary = monitor.run(&mut Readings::new(vec![16.0, 30.0, 80.0, 10.0])).unwrap();
//!
//! assert_eq!(summary.warnings, 1);
//! assert_eq!(summary.emergencies, 1);
//! assert_eq!(summary.fell_below, 1);
//! assert!(!cooling.is_active());
//! assert!(shutdown.is_shut_down());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod events;
pub mod monitor;
pub mod sinks;
pub mod source;

// Re-export commonly used types
pub use crate::core::{AlertLevel, Classification, TemperatureSample, Thresholds};
pub use crate::events::{EventKind, SubscriptionId, TransitionEvent};
pub use crate::monitor::{FailurePolicy, MonitorError, RunSummary, SensorMonitor};
