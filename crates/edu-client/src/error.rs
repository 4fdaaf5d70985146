//! Client error types.

use thiserror::Error;

/// Ways a generation request can fail.
///
/// Lanes treat every variant the same way (transition to `failed`, keep the
/// previous result); the split exists for logs and the per-lane error text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect failure, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The backend answered 2xx but the payload was unusable.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The task running the request ended without producing a response
    /// (panicked or was cancelled).
    #[error("request task failed: {0}")]
    TaskFailed(String),
}
