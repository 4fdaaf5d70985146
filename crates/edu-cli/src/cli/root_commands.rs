use clap::{Args, Subcommand};
use edu_core::LaneKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a lesson plan for a topic.
    LessonPlan(TopicArgs),
    /// Generate a multiple-choice quiz for a topic.
    Quiz(TopicArgs),
    /// Create a student assignment for a topic.
    Assignment(TopicArgs),
    /// Summarize student understanding of a topic.
    Summary(TopicArgs),
    /// Push a topic to the learning management system.
    Lms(TopicArgs),
    /// Ask a free-form question.
    Ask(AskArgs),
    /// Run every topic lane concurrently, printing each as it finishes.
    All(TopicArgs),
}

impl Commands {
    /// Lanes the command triggers.
    #[must_use]
    pub fn lanes(&self) -> Vec<LaneKind> {
        match self {
            Self::LessonPlan(_) => vec![LaneKind::LessonPlan],
            Self::Quiz(_) => vec![LaneKind::Quiz],
            Self::Assignment(_) => vec![LaneKind::Assignment],
            Self::Summary(_) => vec![LaneKind::Summary],
            Self::Lms(_) => vec![LaneKind::LmsIntegration],
            Self::Ask(_) => vec![LaneKind::QuestionAnswering],
            Self::All(_) => LaneKind::TOPIC_BOUND.to_vec(),
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct TopicArgs {
    /// Topic to generate material for.
    pub topic: String,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// The question to answer.
    #[arg(short = 'Q', long)]
    pub question: String,

    /// Optional background the answer should take into account.
    #[arg(short, long, default_value = "")]
    pub context: String,
}
