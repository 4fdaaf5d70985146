//! Scripted in-memory backend for workspace tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use edu_client::{ClientError, GenerationBackend};
use edu_core::{LaneKind, QuizItem};

#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Quiz(Vec<QuizItem>),
    Status(u16),
    Panic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub kind: LaneKind,
    pub args: Vec<String>,
}

/// Pops one scripted reply per call and records every call it sees.
#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<HashMap<LaneKind, VecDeque<Reply>>>,
}

impl FakeBackend {
    pub fn with(mut self, kind: LaneKind, reply: Reply) -> Self {
        self.replies
            .get_mut()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(reply);
        self
    }

    pub fn text(self, kind: LaneKind, text: &str) -> Self {
        self.with(kind, Reply::Text(text.to_string()))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, kind: LaneKind) -> usize {
        self.calls().iter().filter(|call| call.kind == kind).count()
    }

    fn record(&self, kind: LaneKind, args: &[&str]) -> Option<Reply> {
        self.calls.lock().unwrap().push(Call {
            kind,
            args: args.iter().map(ToString::to_string).collect(),
        });
        self.replies
            .lock()
            .unwrap()
            .get_mut(&kind)
            .and_then(VecDeque::pop_front)
    }

    fn text_reply(&self, kind: LaneKind, args: &[&str]) -> Result<String, ClientError> {
        match self.record(kind, args) {
            Some(Reply::Text(text)) => Ok(text),
            other => Err(failure(other)),
        }
    }
}

fn failure(reply: Option<Reply>) -> ClientError {
    match reply {
        Some(Reply::Panic) => panic!("scripted backend panic"),
        Some(Reply::Status(status)) => ClientError::Server {
            status,
            message: "scripted failure".into(),
        },
        _ => ClientError::Malformed("no scripted reply of the expected shape".into()),
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn lesson_plan(&self, topic: &str) -> Result<String, ClientError> {
        self.text_reply(LaneKind::LessonPlan, &[topic])
    }

    async fn quiz(&self, topic: &str) -> Result<Vec<QuizItem>, ClientError> {
        match self.record(LaneKind::Quiz, &[topic]) {
            Some(Reply::Quiz(items)) => Ok(items),
            other => Err(failure(other)),
        }
    }

    async fn assignment(&self, topic: &str) -> Result<String, ClientError> {
        self.text_reply(LaneKind::Assignment, &[topic])
    }

    async fn summarize(&self, topic: &str) -> Result<String, ClientError> {
        self.text_reply(LaneKind::Summary, &[topic])
    }

    async fn integrate_lms(&self, topic: &str) -> Result<String, ClientError> {
        self.text_reply(LaneKind::LmsIntegration, &[topic])
    }

    async fn answer_question(&self, context: &str, question: &str) -> Result<String, ClientError> {
        self.text_reply(LaneKind::QuestionAnswering, &[context, question])
    }
}
