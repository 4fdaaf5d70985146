//! Lane identity and lifecycle status enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`LaneStatus`] provides `allowed_next_states()` so the lane state machine
//! can reject transitions the lifecycle does not permit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// LaneKind
// ---------------------------------------------------------------------------

/// One of the six independently triggerable generation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LaneKind {
    LessonPlan,
    Quiz,
    Assignment,
    Summary,
    LmsIntegration,
    QuestionAnswering,
}

impl LaneKind {
    /// Every lane, in workspace display order.
    pub const ALL: [Self; 6] = [
        Self::LessonPlan,
        Self::Quiz,
        Self::Assignment,
        Self::Summary,
        Self::LmsIntegration,
        Self::QuestionAnswering,
    ];

    /// The five lanes whose trigger is gated on a non-empty topic.
    pub const TOPIC_BOUND: [Self; 5] = [
        Self::LessonPlan,
        Self::Quiz,
        Self::Assignment,
        Self::Summary,
        Self::LmsIntegration,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessonPlan => "lesson_plan",
            Self::Quiz => "quiz",
            Self::Assignment => "assignment",
            Self::Summary => "summary",
            Self::LmsIntegration => "lms_integration",
            Self::QuestionAnswering => "question_answering",
        }
    }

    /// Whether the lane reads the workspace topic.
    #[must_use]
    pub const fn is_topic_bound(self) -> bool {
        !matches!(self, Self::QuestionAnswering)
    }

    /// Whether the lane's text result is markup for the structured-text
    /// renderer. The LMS status is shown as plain text and quizzes have their
    /// own renderer.
    #[must_use]
    pub const fn renders_markup(self) -> bool {
        matches!(
            self,
            Self::LessonPlan | Self::Assignment | Self::Summary | Self::QuestionAnswering
        )
    }

    /// Heading shown above the lane's output.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::LessonPlan => "Lesson Plan Generator",
            Self::Quiz => "Quiz Generator",
            Self::Assignment => "Assignment Creator",
            Self::Summary => "Understanding Summary",
            Self::LmsIntegration => "LMS Integration",
            Self::QuestionAnswering => "Interactive Q&A",
        }
    }

    /// Hint shown while the lane has never produced a result.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::LessonPlan => "Enter a topic and click generate to create your lesson plan",
            Self::Quiz => "Generate quiz questions to assess student knowledge",
            Self::Assignment => "Create engaging assignments for students",
            Self::Summary => "Analyze student understanding and provide feedback",
            Self::LmsIntegration => "Seamlessly integrate with your Learning Management System",
            Self::QuestionAnswering => "Ask questions about any topic and get instant explanations",
        }
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaneKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownLane(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// LaneStatus
// ---------------------------------------------------------------------------

/// Lifecycle position of a lane.
///
/// ```text
/// idle ──trigger──▶ in_flight ──success──▶ ready
///                             ──failure──▶ failed
/// ready  ──trigger──▶ in_flight
/// failed ──trigger──▶ in_flight
/// ```
///
/// There is no terminal state.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LaneStatus {
    #[default]
    Idle,
    InFlight,
    Ready,
    Failed,
}

impl LaneStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle | Self::Ready | Self::Failed => &[Self::InFlight],
            Self::InFlight => &[Self::Ready, Self::Failed],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Validate and perform a transition for `lane`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when `next` is not reachable
    /// from the current status.
    pub fn transition(self, lane: LaneKind, next: Self) -> Result<Self, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                lane: lane.to_string(),
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InFlight => "in_flight",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for LaneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
