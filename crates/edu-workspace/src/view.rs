//! View model built from lane state.
//!
//! Everything here is derived on demand; nothing is cached between renders.

use edu_core::{LaneKind, LaneResult, LaneStatus};
use serde::Serialize;

use crate::quiz::{QuizQuestionView, render_quiz};

/// Turns lightweight markup (Markdown from the backend) into displayable text.
pub trait MarkupRenderer {
    fn render(&self, markup: &str) -> String;
}

/// Pass-through renderer: shows the markup as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimMarkup;

impl MarkupRenderer for VerbatimMarkup {
    fn render(&self, markup: &str) -> String {
        markup.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LaneBody {
    /// The lane has never produced a result.
    Placeholder(String),
    /// Rendered markup.
    Text(String),
    /// Text shown as-is, never passed to the markup renderer.
    Plain(String),
    Quiz(Vec<QuizQuestionView>),
}

impl LaneBody {
    /// Dispatch a stored result to its renderer.
    pub fn from_result(
        kind: LaneKind,
        result: Option<LaneResult>,
        renderer: &impl MarkupRenderer,
    ) -> Self {
        match result {
            None => Self::Placeholder(kind.placeholder().to_string()),
            Some(LaneResult::Text(text)) if kind.renders_markup() => {
                Self::Text(renderer.render(&text))
            }
            Some(LaneResult::Text(text)) => Self::Plain(text),
            Some(LaneResult::Quiz(items)) => Self::Quiz(render_quiz(&items)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneView {
    pub kind: LaneKind,
    pub title: &'static str,
    pub status: LaneStatus,
    /// Whether the lane's trigger control should be clickable.
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub body: LaneBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceView {
    pub topic: String,
    pub lanes: Vec<LaneView>,
}

impl WorkspaceView {
    #[must_use]
    pub fn lane(&self, kind: LaneKind) -> Option<&LaneView> {
        self.lanes.iter().find(|lane| lane.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_core::QuizItem;

    struct Shouting;

    impl MarkupRenderer for Shouting {
        fn render(&self, markup: &str) -> String {
            markup.to_uppercase()
        }
    }

    #[test]
    fn missing_result_shows_lane_placeholder() {
        let body = LaneBody::from_result(LaneKind::Assignment, None, &VerbatimMarkup);
        assert_eq!(
            body,
            LaneBody::Placeholder("Create engaging assignments for students".into())
        );
    }

    #[test]
    fn text_goes_through_markup_renderer() {
        let body = LaneBody::from_result(
            LaneKind::Summary,
            Some(LaneResult::Text("## summary".into())),
            &Shouting,
        );
        assert_eq!(body, LaneBody::Text("## SUMMARY".into()));
    }

    #[test]
    fn lms_status_bypasses_markup_renderer() {
        let body = LaneBody::from_result(
            LaneKind::LmsIntegration,
            Some(LaneResult::Text("Integrated successfully".into())),
            &Shouting,
        );
        assert_eq!(body, LaneBody::Plain("Integrated successfully".into()));
    }

    #[test]
    fn quiz_bypasses_markup_renderer() {
        let items = vec![QuizItem {
            question: "q".into(),
            options: vec!["A) yes".into()],
            answer: "A".into(),
            explanation: None,
        }];
        let body = LaneBody::from_result(LaneKind::Quiz, Some(LaneResult::Quiz(items)), &Shouting);
        let LaneBody::Quiz(questions) = body else {
            panic!("expected quiz body");
        };
        assert_eq!(questions[0].question, "q");
        assert!(questions[0].options[0].correct);
    }

    #[test]
    fn body_serializes_with_kind_tag() {
        let json = serde_json::to_value(LaneBody::Text("hi".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "text", "value": "hi"}));
    }
}
