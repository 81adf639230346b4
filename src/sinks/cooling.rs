//! Cooling actuator contract and a switch implementation.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{debug, info};

/// Capability to turn cooling on and off.
///
/// Both operations must be idempotent: activating an active mechanism (or
/// deactivating an inactive one) leaves it unchanged.
pub trait CoolingMechanism: Send + Sync {
    fn activate(&self);

    fn deactivate(&self);

    fn is_active(&self) -> bool;
}

/// On/off cooling switch that only acts on real state changes.
///
/// # Example
///
/// ```rust
/// use thermowatch::sinks::{CoolingMechanism, CoolingSwitch};
///
/// let switch = CoolingSwitch::new();
/// switch.activate();
/// switch.activate();
///
/// assert!(switch.is_active());
/// assert_eq!(switch.switch_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CoolingSwitch {
    active: AtomicBool,
    switches: AtomicUsize,
}

impl CoolingSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the switch actually changed position.
    pub fn switch_count(&self) -> usize {
        self.switches.load(Ordering::SeqCst)
    }

    fn set(&self, on: bool) {
        if self.active.swap(on, Ordering::SeqCst) == on {
            debug!(active = on, "Cooling mechanism already in requested state");
            return;
        }
        self.switches.fetch_add(1, Ordering::SeqCst);
        if on {
            info!("Switching cooling mechanism on");
        } else {
            info!("Switching cooling mechanism off");
        }
    }
}

impl CoolingMechanism for CoolingSwitch {
    fn activate(&self) {
        self.set(true);
    }

    fn deactivate(&self) {
        self.set(false);
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
