//! Quiz endpoint.

use edu_core::QuizItem;

use crate::{
    GenerationClient,
    error::ClientError,
    http::{check_response, read_json},
};

#[derive(serde::Deserialize)]
struct QuizResponse {
    quiz: Vec<QuizItem>,
}

impl GenerationClient {
    /// `GET /quiz?topic=…` and return the items in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or `quiz` is missing or not a list of quiz items.
    pub async fn fetch_quiz(&self, topic: &str) -> Result<Vec<QuizItem>, ClientError> {
        let url = self.topic_query("/quiz", topic);
        tracing::debug!(%url, "requesting quiz");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: QuizResponse = read_json(resp).await?;
        Ok(data.quiz)
    }
}
