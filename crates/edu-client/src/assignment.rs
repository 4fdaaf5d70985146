//! Assignment endpoint.

use crate::{
    GenerationClient,
    error::ClientError,
    http::{check_response, read_json},
};

#[derive(serde::Deserialize)]
struct AssignmentResponse {
    assignment: String,
}

impl GenerationClient {
    /// `GET /assignment?topic=…` and return the Markdown assignment verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or `assignment` is missing.
    pub async fn fetch_assignment(&self, topic: &str) -> Result<String, ClientError> {
        let url = self.topic_query("/assignment", topic);
        tracing::debug!(%url, "requesting assignment");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: AssignmentResponse = read_json(resp).await?;
        Ok(data.assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::decode;

    #[test]
    fn parses_assignment_field() {
        let data: AssignmentResponse =
            decode(r###"{"assignment": "## Assignment: Fractions"}"###).unwrap();
        assert_eq!(data.assignment, "## Assignment: Fractions");
    }

    #[test]
    fn null_assignment_is_malformed() {
        assert!(decode::<AssignmentResponse>(r#"{"assignment": null}"#).is_err());
    }
}
