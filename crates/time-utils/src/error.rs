//! Error types for time-utils operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Cannot parse '{input}' with layout '{layout}': {reason}")]
    Parse {
        input: String,
        layout: String,
        reason: String,
    },

    #[error("Invalid layout: '{0}'")]
    InvalidLayout(String),

    #[error("Unknown timezone: '{0}'")]
    UnknownTimezone(String),

    #[error("Timestamp out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, TimeError>;
