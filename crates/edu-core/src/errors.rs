//! Cross-cutting error types for the Educator Copilot client.
//!
//! Transport failures live in `edu-client` and configuration failures in
//! `edu-config`; this module only covers domain validation.

use thiserror::Error;

/// Errors that can be raised by any Educator Copilot crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A lane name did not match any known lane.
    #[error("Unknown lane: {0}")]
    UnknownLane(String),

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid lane transition: {lane} from {from} to {to}")]
    InvalidTransition {
        lane: String,
        from: String,
        to: String,
    },

    /// A lane received a result of the wrong shape (text vs. quiz).
    #[error("Unexpected result shape: expected {expected}")]
    ResultShape { expected: &'static str },
}
