//! Question answering endpoint.

use crate::{
    GenerationClient,
    error::ClientError,
    http::{check_response, read_json},
};

#[derive(serde::Serialize)]
struct QuestionBody<'a> {
    context: &'a str,
    question: &'a str,
}

#[derive(serde::Deserialize)]
struct AnswerResponse {
    answer: String,
}

impl GenerationClient {
    /// `POST /question-answering` with `{"context": …, "question": …}`.
    ///
    /// An empty context is sent as `""`, not omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or `answer` is missing.
    pub async fn post_question(&self, context: &str, question: &str) -> Result<String, ClientError> {
        let url = self.endpoint("/question-answering");
        tracing::debug!(%url, "requesting answer");
        let resp = check_response(
            self.http
                .post(&url)
                .json(&QuestionBody { context, question })
                .send()
                .await?,
        )
        .await?;
        let data: AnswerResponse = read_json(resp).await?;
        Ok(data.answer)
    }
}
