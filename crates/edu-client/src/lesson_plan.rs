//! Lesson plan endpoint.

use crate::{
    GenerationClient,
    error::ClientError,
    http::{check_response, read_json},
};

#[derive(serde::Deserialize)]
struct LessonPlanResponse {
    lesson_plan: String,
}

impl GenerationClient {
    /// `GET /lesson-plan?topic=…` and return the Markdown lesson plan verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or `lesson_plan` is missing.
    pub async fn fetch_lesson_plan(&self, topic: &str) -> Result<String, ClientError> {
        let url = self.topic_query("/lesson-plan", topic);
        tracing::debug!(%url, "requesting lesson plan");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: LessonPlanResponse = read_json(resp).await?;
        Ok(data.lesson_plan)
    }
}
