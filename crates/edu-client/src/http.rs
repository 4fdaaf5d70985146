//! Shared HTTP response helpers for the generation endpoints.
//!
//! Centralizes the status check (non-success → [`ClientError::Server`]) and
//! payload decoding (undecodable or missing field → [`ClientError::Malformed`])
//! so endpoint modules stay focused on request construction and field mapping.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Server {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body and decode it as `T`.
///
/// Body read failures are transport errors; decode failures mean the backend
/// sent something other than the documented shape.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    decode(&body)
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Malformed(e.to_string()))
}
