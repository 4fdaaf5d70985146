//! # edu-client
//!
//! HTTP client for the Educator Copilot content-generation backend.
//!
//! One method per generation endpoint:
//! - `GET  /lesson-plan?topic=…`  → `lesson_plan`
//! - `GET  /quiz?topic=…`         → `quiz`
//! - `GET  /assignment?topic=…`   → `assignment`
//! - `POST /summarize`            → `summary`
//! - `POST /integrate-lms`        → `status`
//! - `POST /question-answering`   → `answer`
//!
//! [`GenerationBackend`] is the seam the workspace orchestrates against;
//! [`GenerationClient`] is its HTTP implementation.

pub mod assignment;
pub mod lesson_plan;
pub mod lms;
pub mod qa;
pub mod quiz;
pub mod summary;

mod error;
mod http;

pub use error::ClientError;

use async_trait::async_trait;
use edu_config::BackendConfig;
use edu_core::QuizItem;

// ── Backend seam ───────────────────────────────────────────────────

/// The six generation calls a workspace can issue.
///
/// Each call resolves to exactly the consumed response field; everything
/// else the backend sends is ignored.
#[async_trait]
pub trait GenerationBackend: Send + Sync + 'static {
    async fn lesson_plan(&self, topic: &str) -> Result<String, ClientError>;

    async fn quiz(&self, topic: &str) -> Result<Vec<QuizItem>, ClientError>;

    async fn assignment(&self, topic: &str) -> Result<String, ClientError>;

    async fn summarize(&self, topic: &str) -> Result<String, ClientError>;

    async fn integrate_lms(&self, topic: &str) -> Result<String, ClientError>;

    async fn answer_question(&self, context: &str, question: &str) -> Result<String, ClientError>;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the generation backend.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
}

impl GenerationClient {
    /// Create a client from backend settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the underlying `reqwest::Client`
    /// fails to build (e.g. no TLS backend available).
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` (which must start with `/`).
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Absolute URL for a topic-bound GET endpoint, topic percent-encoded.
    #[must_use]
    pub fn topic_query(&self, path: &str, topic: &str) -> String {
        format!("{}{path}?topic={}", self.base_url, urlencoding::encode(topic))
    }
}

#[async_trait]
impl GenerationBackend for GenerationClient {
    async fn lesson_plan(&self, topic: &str) -> Result<String, ClientError> {
        self.fetch_lesson_plan(topic).await
    }

    async fn quiz(&self, topic: &str) -> Result<Vec<QuizItem>, ClientError> {
        self.fetch_quiz(topic).await
    }

    async fn assignment(&self, topic: &str) -> Result<String, ClientError> {
        self.fetch_assignment(topic).await
    }

    async fn summarize(&self, topic: &str) -> Result<String, ClientError> {
        self.post_summary(topic).await
    }

    async fn integrate_lms(&self, topic: &str) -> Result<String, ClientError> {
        self.post_lms_integration(topic).await
    }

    async fn answer_question(&self, context: &str, question: &str) -> Result<String, ClientError> {
        self.post_question(context, question).await
    }
}
