//! # edu-core
//!
//! Core types shared by every Educator Copilot crate:
//! - Lane identity and lifecycle status enums
//! - The quiz item contract produced by the generation backend
//! - The tagged result union each lane stores
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod quiz;
pub mod result;

pub use enums::{LaneKind, LaneStatus};
pub use errors::CoreError;
pub use quiz::QuizItem;
pub use result::LaneResult;
