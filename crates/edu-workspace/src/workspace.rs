//! Topic workspace: owns every lane and routes backend responses to them.

use std::sync::Arc;

use edu_client::{ClientError, GenerationBackend};
use edu_core::{CoreError, LaneKind, LaneResult, LaneStatus, QuizItem};
use tokio::sync::mpsc;

use crate::lane::{GateReason, Lane, TriggerOutcome};
use crate::qa::QaLane;
use crate::topic::TopicField;
use crate::view::{LaneBody, LaneView, MarkupRenderer, WorkspaceView};

/// A settled backend call on its way back to the workspace.
#[derive(Debug)]
pub struct Completion {
    pub kind: LaneKind,
    pub seq: u64,
    pub outcome: Result<LaneResult, ClientError>,
}

/// Owned request arguments captured at trigger time.
#[derive(Debug)]
enum Request {
    LessonPlan(String),
    Quiz(String),
    Assignment(String),
    Summary(String),
    LmsIntegration(String),
    Question { context: String, question: String },
}

impl Request {
    async fn send<B: GenerationBackend>(self, backend: &B) -> Result<LaneResult, ClientError> {
        match self {
            Self::LessonPlan(topic) => backend.lesson_plan(&topic).await.map(LaneResult::Text),
            Self::Quiz(topic) => backend.quiz(&topic).await.map(LaneResult::Quiz),
            Self::Assignment(topic) => backend.assignment(&topic).await.map(LaneResult::Text),
            Self::Summary(topic) => backend.summarize(&topic).await.map(LaneResult::Text),
            Self::LmsIntegration(topic) => backend.integrate_lms(&topic).await.map(LaneResult::Text),
            Self::Question { context, question } => backend
                .answer_question(&context, &question)
                .await
                .map(LaneResult::Text),
        }
    }
}

/// The educator's workspace.
///
/// Triggers spawn their backend call on the ambient tokio runtime, so
/// [`TopicWorkspace::trigger`] must be called from within one. Responses are
/// applied only through [`TopicWorkspace::next_completion`] or
/// [`TopicWorkspace::apply`], by the single owner of the workspace.
pub struct TopicWorkspace<B> {
    backend: Arc<B>,
    topic: TopicField,
    lesson_plan: Lane<String>,
    quiz: Lane<Vec<QuizItem>>,
    assignment: Lane<String>,
    summary: Lane<String>,
    lms: Lane<String>,
    qa: QaLane,
    sender: mpsc::UnboundedSender<Completion>,
    completions: mpsc::UnboundedReceiver<Completion>,
}

impl<B: GenerationBackend> TopicWorkspace<B> {
    #[must_use]
    pub fn new(backend: Arc<B>) -> Self {
        let (sender, completions) = mpsc::unbounded_channel();
        Self {
            backend,
            topic: TopicField::default(),
            lesson_plan: Lane::new(LaneKind::LessonPlan),
            quiz: Lane::new(LaneKind::Quiz),
            assignment: Lane::new(LaneKind::Assignment),
            summary: Lane::new(LaneKind::Summary),
            lms: Lane::new(LaneKind::LmsIntegration),
            qa: QaLane::default(),
            sender,
            completions,
        }
    }

    // ── Inputs ─────────────────────────────────────────────────────

    #[must_use]
    pub fn topic(&self) -> &str {
        self.topic.value()
    }

    /// Replace the topic. Existing lane results are left alone.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic.set(topic);
    }

    #[must_use]
    pub const fn qa(&self) -> &QaLane {
        &self.qa
    }

    pub fn set_qa_context(&mut self, context: impl Into<String>) {
        self.qa.set_context(context);
    }

    pub fn set_qa_question(&mut self, question: impl Into<String>) {
        self.qa.set_question(question);
    }

    // ── Lane state ─────────────────────────────────────────────────

    #[must_use]
    pub const fn lesson_plan(&self) -> &Lane<String> {
        &self.lesson_plan
    }

    #[must_use]
    pub const fn quiz(&self) -> &Lane<Vec<QuizItem>> {
        &self.quiz
    }

    #[must_use]
    pub const fn assignment(&self) -> &Lane<String> {
        &self.assignment
    }

    #[must_use]
    pub const fn summary(&self) -> &Lane<String> {
        &self.summary
    }

    #[must_use]
    pub const fn lms(&self) -> &Lane<String> {
        &self.lms
    }

    #[must_use]
    pub fn status(&self, kind: LaneKind) -> LaneStatus {
        match kind {
            LaneKind::LessonPlan => self.lesson_plan.status(),
            LaneKind::Quiz => self.quiz.status(),
            LaneKind::Assignment => self.assignment.status(),
            LaneKind::Summary => self.summary.status(),
            LaneKind::LmsIntegration => self.lms.status(),
            LaneKind::QuestionAnswering => self.qa.lane().status(),
        }
    }

    #[must_use]
    pub fn last_error(&self, kind: LaneKind) -> Option<&str> {
        match kind {
            LaneKind::LessonPlan => self.lesson_plan.last_error(),
            LaneKind::Quiz => self.quiz.last_error(),
            LaneKind::Assignment => self.assignment.last_error(),
            LaneKind::Summary => self.summary.last_error(),
            LaneKind::LmsIntegration => self.lms.last_error(),
            LaneKind::QuestionAnswering => self.qa.lane().last_error(),
        }
    }

    /// Stored result of `kind`, wrapped in the tagged union.
    #[must_use]
    pub fn result(&self, kind: LaneKind) -> Option<LaneResult> {
        let text = |lane: &Lane<String>| lane.result().cloned().map(LaneResult::Text);
        match kind {
            LaneKind::LessonPlan => text(&self.lesson_plan),
            LaneKind::Quiz => self.quiz.result().cloned().map(LaneResult::Quiz),
            LaneKind::Assignment => text(&self.assignment),
            LaneKind::Summary => text(&self.summary),
            LaneKind::LmsIntegration => text(&self.lms),
            LaneKind::QuestionAnswering => text(self.qa.lane()),
        }
    }

    /// Number of lanes with a request outstanding.
    #[must_use]
    pub fn pending(&self) -> usize {
        LaneKind::ALL
            .into_iter()
            .filter(|kind| self.status(*kind) == LaneStatus::InFlight)
            .count()
    }

    /// Check whether `kind` can be triggered right now.
    ///
    /// # Errors
    ///
    /// Returns the first gate that blocks a trigger.
    pub fn gate(&self, kind: LaneKind) -> Result<(), GateReason> {
        if kind == LaneKind::QuestionAnswering {
            return self.qa.gate();
        }
        if self.topic.is_empty() {
            return Err(GateReason::EmptyTopic);
        }
        if self.status(kind) == LaneStatus::InFlight {
            return Err(GateReason::InFlight);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_enabled(&self, kind: LaneKind) -> bool {
        self.gate(kind).is_ok()
    }

    // ── Orchestration ──────────────────────────────────────────────

    /// Trigger `kind`: move it to `in_flight` and issue exactly one request.
    ///
    /// A refused trigger issues nothing and leaves the lane as it was.
    pub fn trigger(&mut self, kind: LaneKind) -> TriggerOutcome {
        if let Err(reason) = self.gate(kind) {
            tracing::debug!(lane = %kind, ?reason, "trigger refused");
            return TriggerOutcome::Rejected(reason);
        }

        let topic = self.topic.value().to_string();
        let (begun, request) = match kind {
            LaneKind::LessonPlan => (self.lesson_plan.begin(), Request::LessonPlan(topic)),
            LaneKind::Quiz => (self.quiz.begin(), Request::Quiz(topic)),
            LaneKind::Assignment => (self.assignment.begin(), Request::Assignment(topic)),
            LaneKind::Summary => (self.summary.begin(), Request::Summary(topic)),
            LaneKind::LmsIntegration => (self.lms.begin(), Request::LmsIntegration(topic)),
            LaneKind::QuestionAnswering => {
                let request = Request::Question {
                    context: self.qa.context().to_string(),
                    question: self.qa.question().to_string(),
                };
                (self.qa.lane_mut().begin(), request)
            }
        };
        let seq = match begun {
            Ok(seq) => seq,
            Err(reason) => return TriggerOutcome::Rejected(reason),
        };

        tracing::debug!(lane = %kind, seq, "lane triggered");
        let backend = Arc::clone(&self.backend);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            // A panicking backend call must still settle the lane.
            let call = tokio::spawn(async move { request.send(backend.as_ref()).await });
            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(error) => {
                    tracing::error!(lane = %kind, seq, %error, "generation task aborted");
                    Err(ClientError::TaskFailed(error.to_string()))
                }
            };
            // The receiver only goes away with the workspace.
            let _ = sender.send(Completion { kind, seq, outcome });
        });

        TriggerOutcome::Started { seq }
    }

    /// Apply a completion to its lane.
    ///
    /// Returns the lane that changed, or `None` if the completion was stale.
    pub fn apply(&mut self, completion: Completion) -> Option<LaneKind> {
        let Completion { kind, seq, outcome } = completion;
        let applied = match kind {
            LaneKind::LessonPlan => settle(&mut self.lesson_plan, seq, outcome),
            LaneKind::Quiz => settle(&mut self.quiz, seq, outcome),
            LaneKind::Assignment => settle(&mut self.assignment, seq, outcome),
            LaneKind::Summary => settle(&mut self.summary, seq, outcome),
            LaneKind::LmsIntegration => settle(&mut self.lms, seq, outcome),
            LaneKind::QuestionAnswering => settle(self.qa.lane_mut(), seq, outcome),
        };
        applied.then_some(kind)
    }

    /// Wait for the next response and apply it.
    ///
    /// Returns `None` once no lane has a request outstanding.
    pub async fn next_completion(&mut self) -> Option<LaneKind> {
        while self.pending() > 0 {
            let completion = self.completions.recv().await?;
            if let Some(kind) = self.apply(completion) {
                return Some(kind);
            }
        }
        None
    }

    // ── View ───────────────────────────────────────────────────────

    /// Build the display state of every lane, in workspace order.
    #[must_use]
    pub fn view(&self, renderer: &impl MarkupRenderer) -> WorkspaceView {
        let lanes = LaneKind::ALL
            .into_iter()
            .map(|kind| self.lane_view(kind, renderer))
            .collect();
        WorkspaceView {
            topic: self.topic.value().to_string(),
            lanes,
        }
    }

    #[must_use]
    pub fn lane_view(&self, kind: LaneKind, renderer: &impl MarkupRenderer) -> LaneView {
        LaneView {
            kind,
            title: kind.title(),
            status: self.status(kind),
            enabled: self.is_enabled(kind),
            error: self.last_error(kind).map(ToString::to_string),
            body: LaneBody::from_result(kind, self.result(kind), renderer),
        }
    }
}

/// Convert a completion outcome to the lane's result type and settle it.
fn settle<R>(lane: &mut Lane<R>, seq: u64, outcome: Result<LaneResult, ClientError>) -> bool
where
    R: TryFrom<LaneResult, Error = CoreError>,
{
    let outcome = outcome
        .map_err(|error| error.to_string())
        .and_then(|result| R::try_from(result).map_err(|error| error.to_string()));
    lane.complete(seq, outcome)
}
