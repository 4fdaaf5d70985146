//! LMS integration endpoint.

use crate::{
    GenerationClient,
    error::ClientError,
    http::{check_response, read_json},
    summary::TopicBody,
};

/// The backend also echoes the submitted payload under `data`; only the
/// status line is consumed.
#[derive(serde::Deserialize)]
struct LmsResponse {
    status: String,
}

impl GenerationClient {
    /// `POST /integrate-lms` with `{"topic": …}` and return the status text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or `status` is missing.
    pub async fn post_lms_integration(&self, topic: &str) -> Result<String, ClientError> {
        let url = self.endpoint("/integrate-lms");
        tracing::debug!(%url, "requesting LMS integration");
        let resp = check_response(
            self.http
                .post(&url)
                .json(&TopicBody { topic })
                .send()
                .await?,
        )
        .await?;
        let data: LmsResponse = read_json(resp).await?;
        Ok(data.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::decode;

    #[test]
    fn ignores_echoed_payload() {
        let data: LmsResponse = decode(
            r#"{"status": "Integrated successfully", "data": {"topic": "Algebra"}}"#,
        )
        .unwrap();
        assert_eq!(data.status, "Integrated successfully");
    }
}
