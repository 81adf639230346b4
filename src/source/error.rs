//! Source read errors.

use thiserror::Error;

/// Errors a temperature source can report while producing samples
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SourceError {
    /// The underlying read failed
    #[error("sensor read failed: {0}")]
    ReadFailed(String),

    /// The producer went away before signalling the end of the sequence
    #[error("sensor disconnected")]
    Disconnected,
}
