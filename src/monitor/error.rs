//! Monitor error types.

use crate::core::InvalidThresholds;
use crate::events::{EventKind, HandlerError, SubscriptionId};
use crate::source::SourceError;
use thiserror::Error;

/// Errors that can occur when constructing or running a monitor
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Thresholds rejected at construction; the monitor never runs
    #[error(transparent)]
    InvalidThresholds(#[from] InvalidThresholds),

    /// The source failed mid-run; samples after `index` were not processed
    #[error("temperature source failed at sample {index}: {source}")]
    SourceExhaustedUnexpectedly { index: usize, source: SourceError },

    /// A subscriber failed under [`FailurePolicy::Abort`](super::FailurePolicy::Abort)
    #[error("subscriber {subscription} failed handling {kind}: {source}")]
    SubscriberFailure {
        kind: EventKind,
        subscription: SubscriptionId,
        source: HandlerError,
    },
}
