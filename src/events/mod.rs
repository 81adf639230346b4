//! Transition events and the subscription registry that fans them out.
//!
//! The registry itself is internal to the monitor. Callers subscribe through
//! [`SensorMonitor`](crate::monitor::SensorMonitor).
//!
//! Events are tagged by [`EventKind`]. Subscribers register a callback
//! for a kind and receive every event of that kind, synchronously and in
//! subscription order.

mod event;
mod registry;

pub use event::{EventKind, TransitionEvent};
pub(crate) use registry::SubscriptionRegistry;
pub use registry::{DispatchContext, Handler, HandlerError, HandlerResult, SubscriptionId};
