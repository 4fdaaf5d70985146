//! Tagged union over the result shapes a lane can hold.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::quiz::QuizItem;

/// A lane's stored result.
///
/// Text lanes (lesson plan, assignment, summary, LMS status, Q&A answer) hold
/// markup text; the quiz lane holds structured items. Renderers match on the
/// variant once instead of probing the payload's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LaneResult {
    Text(String),
    Quiz(Vec<QuizItem>),
}

impl LaneResult {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Quiz(_) => None,
        }
    }

    #[must_use]
    pub fn as_quiz(&self) -> Option<&[QuizItem]> {
        match self {
            Self::Quiz(items) => Some(items),
            Self::Text(_) => None,
        }
    }
}

impl From<String> for LaneResult {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<QuizItem>> for LaneResult {
    fn from(items: Vec<QuizItem>) -> Self {
        Self::Quiz(items)
    }
}

impl TryFrom<LaneResult> for String {
    type Error = CoreError;

    fn try_from(result: LaneResult) -> Result<Self, Self::Error> {
        match result {
            LaneResult::Text(text) => Ok(text),
            LaneResult::Quiz(_) => Err(CoreError::ResultShape { expected: "text" }),
        }
    }
}

impl TryFrom<LaneResult> for Vec<QuizItem> {
    type Error = CoreError;

    fn try_from(result: LaneResult) -> Result<Self, Self::Error> {
        match result {
            LaneResult::Quiz(items) => Ok(items),
            LaneResult::Text(_) => Err(CoreError::ResultShape { expected: "quiz" }),
        }
    }
}
