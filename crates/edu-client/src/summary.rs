//! Understanding summary endpoint.

use crate::{
    GenerationClient,
    error::ClientError,
    http::{check_response, read_json},
};

#[derive(serde::Serialize)]
pub(crate) struct TopicBody<'a> {
    pub topic: &'a str,
}

#[derive(serde::Deserialize)]
struct SummaryResponse {
    summary: String,
}

impl GenerationClient {
    /// `POST /summarize` with `{"topic": …}` and return the Markdown summary.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or `summary` is missing.
    pub async fn post_summary(&self, topic: &str) -> Result<String, ClientError> {
        let url = self.endpoint("/summarize");
        tracing::debug!(%url, "requesting summary");
        let resp = check_response(
            self.http
                .post(&url)
                .json(&TopicBody { topic })
                .send()
                .await?,
        )
        .await?;
        let data: SummaryResponse = read_json(resp).await?;
        Ok(data.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::decode;

    #[test]
    fn topic_body_shape() {
        let body = serde_json::to_value(TopicBody { topic: "Cells" }).unwrap();
        assert_eq!(body, serde_json::json!({"topic": "Cells"}));
    }

    #[test]
    fn parses_summary_field() {
        let data: SummaryResponse =
            decode(r###"{"summary": "## Understanding Summary: Cells"}"###).unwrap();
        assert_eq!(data.summary, "## Understanding Summary: Cells");
    }
}
