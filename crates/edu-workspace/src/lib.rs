//! # edu-workspace
//!
//! The topic workspace: one topic field, five topic-bound generation lanes,
//! and a question-answering lane, each with its own lifecycle state.
//!
//! Lanes never share state. A trigger moves its lane to `in_flight` and
//! spawns the backend call; the response comes back as a [`Completion`] over
//! a channel and is applied by whoever owns the workspace. Each request is
//! tagged with a per-lane sequence number so a response can only settle the
//! request that produced it.

pub mod lane;
pub mod qa;
pub mod quiz;
pub mod topic;
pub mod view;
pub mod workspace;

pub use lane::{GateReason, Lane, LaneState, TriggerOutcome};
pub use qa::QaLane;
pub use quiz::{QuizOptionView, QuizQuestionView, render_quiz};
pub use topic::TopicField;
pub use view::{LaneBody, LaneView, MarkupRenderer, VerbatimMarkup, WorkspaceView};
pub use workspace::{Completion, TopicWorkspace};
