//! Typed subscription registry with synchronous fan-out.

use super::event::{EventKind, TransitionEvent};
use crate::monitor::{MonitorId, StopHandle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Failure reported by a subscriber.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type returned by subscribers
pub type HandlerResult = Result<(), HandlerError>;

/// Boxed subscriber callback.
pub type Handler = Box<dyn FnMut(&TransitionEvent, &mut DispatchContext) -> HandlerResult + Send>;

/// View of the monitor handed to subscribers during dispatch.
///
/// The registry is busy while a handler runs, so subscription changes made
/// from inside a handler are queued here and applied by the registry as
/// soon as that handler returns.
#[derive(Debug)]
pub struct DispatchContext {
    monitor_id: MonitorId,
    stop: StopHandle,
    removals: Vec<SubscriptionId>,
}

impl DispatchContext {
    pub(crate) fn new(monitor_id: MonitorId, stop: StopHandle) -> Self {
        Self {
            monitor_id,
            stop,
            removals: Vec::new(),
        }
    }

    /// Monitor that emitted the event.
    pub fn monitor_id(&self) -> MonitorId {
        self.monitor_id
    }

    /// Remove a subscription, possibly the caller's own.
    ///
    /// A subscription removed here never runs again, including for the
    /// event currently being dispatched if it has not been reached yet.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.removals.push(id);
    }

    /// Ask the monitor to stop before the next sample.
    pub fn request_stop(&self) {
        self.stop.stop();
    }

    fn take_removals(&mut self) -> Vec<SubscriptionId> {
        std::mem::take(&mut self.removals)
    }
}

/// Outcome of delivering one event.
#[derive(Debug, Default)]
pub(crate) struct DispatchReport {
    pub delivered: usize,
    pub failures: Vec<(SubscriptionId, HandlerError)>,
}

struct Subscription {
    id: SubscriptionId,
    handler: Handler,
}

/// Ordered handler lists keyed by event kind.
///
/// Handlers for a kind run in the order they were subscribed. The same
/// callback may be subscribed more than once; every subscription fires.
#[derive(Default)]
pub(crate) struct SubscriptionRegistry {
    next_id: u64,
    by_kind: HashMap<EventKind, Vec<Subscription>>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind`.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.by_kind
            .entry(kind)
            .or_default()
            .push(Subscription { id, handler });
        id
    }

    /// Remove a subscription. Returns `false` if `id` is not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for subscriptions in self.by_kind.values_mut() {
            if let Some(position) = subscriptions.iter().position(|s| s.id == id) {
                subscriptions.remove(position);
                return true;
            }
        }
        false
    }

    /// Number of handlers currently registered for `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    /// Whether `id` is currently registered.
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.by_kind
            .values()
            .any(|subscriptions| subscriptions.iter().any(|s| s.id == id))
    }

    pub fn is_empty(&self) -> bool {
        self.by_kind.values().all(Vec::is_empty)
    }

    /// Deliver `event` to every handler of its kind, in subscription order.
    ///
    /// With `stop_on_failure` the first failing handler ends the fan-out;
    /// otherwise every remaining handler still runs.
    pub(crate) fn dispatch(
        &mut self,
        event: &TransitionEvent,
        context: &mut DispatchContext,
        stop_on_failure: bool,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();
        let mut removed: Vec<SubscriptionId> = Vec::new();

        if let Some(subscriptions) = self.by_kind.get_mut(&event.kind()) {
            for subscription in subscriptions.iter_mut() {
                if removed.contains(&subscription.id) {
                    continue;
                }

                let outcome = (subscription.handler)(event, context);
                removed.extend(context.take_removals());

                match outcome {
                    Ok(()) => report.delivered += 1,
                    Err(error) => {
                        report.failures.push((subscription.id, error));
                        if stop_on_failure {
                            break;
                        }
                    }
                }
            }
        }

        for id in removed {
            self.unsubscribe(id);
        }

        report
    }
}

impl std::fmt::Debug for SubscriptionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(EventKind, usize)> = self
            .by_kind
            .iter()
            .map(|(kind, subscriptions)| (*kind, subscriptions.len()))
            .collect();
        counts.sort();

        f.debug_struct("SubscriptionRegistry")
            .field("next_id", &self.next_id)
            .field("handlers", &counts)
            .finish()
    }
}
