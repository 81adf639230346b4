//! What a monitor does when a subscriber fails.

use serde::{Deserialize, Serialize};

/// Strategy for handling subscriber failures during dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the fan-out and the run, returning the failure to the caller
    #[default]
    Abort,

    /// Log the failure, keep dispatching, and count it in the run summary
    IsolateAndLog,
}

impl FailurePolicy {
    pub(crate) fn stops_on_failure(&self) -> bool {
        matches!(self, Self::Abort)
    }
}
