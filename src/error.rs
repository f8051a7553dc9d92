//! Error types for stopclock

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClockError>;

/// Errors raised while constructing or reporting a [`StopClock`](crate::StopClock)
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("no output sink was supplied")]
    MissingSink,

    #[error("output sink must be writable")]
    Unwritable,

    #[error("failed to write duration report: {0}")]
    Io(#[from] std::io::Error),
}
