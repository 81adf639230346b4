//! Subscribers that turn transition events into side effects.
//!
//! The actuators are capability traits ([`CoolingMechanism`],
//! [`EmergencyEscalation`]) so real hardware can be swapped in. The
//! bundled implementations only track state and log. [`AlertLog`] is the
//! informational display and can be attached on its own. [`Thermostat`]
//! wires all of them to a monitor.

mod alert;
mod cooling;
mod emergency;
mod thermostat;

pub use alert::{Alert, AlertLog, Severity};
pub use cooling::{CoolingMechanism, CoolingSwitch};
pub use emergency::{DeviceShutdown, EmergencyEscalation, ShutdownHook};
pub use thermostat::{Thermostat, Wiring};
