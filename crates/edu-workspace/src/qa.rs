//! Question-answering lane.

use edu_core::LaneKind;

use crate::lane::{GateReason, Lane};

/// Free-form Q&A: optional context, required question, text answer.
///
/// Gated on the question alone; the workspace topic plays no part.
#[derive(Debug)]
pub struct QaLane {
    context: String,
    question: String,
    lane: Lane<String>,
}

impl Default for QaLane {
    fn default() -> Self {
        Self {
            context: String::new(),
            question: String::new(),
            lane: Lane::new(LaneKind::QuestionAnswering),
        }
    }
}

impl QaLane {
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    #[must_use]
    pub const fn lane(&self) -> &Lane<String> {
        &self.lane
    }

    pub(crate) fn lane_mut(&mut self) -> &mut Lane<String> {
        &mut self.lane
    }

    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        self.lane.result().map(String::as_str)
    }

    /// Check the trigger gate without changing anything.
    ///
    /// # Errors
    ///
    /// Returns the first gate that blocks a trigger.
    pub fn gate(&self) -> Result<(), GateReason> {
        if self.question.is_empty() {
            return Err(GateReason::EmptyQuestion);
        }
        if self.lane.is_in_flight() {
            return Err(GateReason::InFlight);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.gate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_question_blocks_trigger() {
        let mut qa = QaLane::default();
        qa.set_context("Plants");
        assert_eq!(qa.gate(), Err(GateReason::EmptyQuestion));
        qa.set_question("What is chlorophyll?");
        assert!(qa.is_enabled());
    }

    #[test]
    fn empty_context_is_allowed() {
        let mut qa = QaLane::default();
        qa.set_question("Why is the sky blue?");
        assert_eq!(qa.context(), "");
        assert!(qa.gate().is_ok());
    }

    #[test]
    fn in_flight_blocks_trigger() {
        let mut qa = QaLane::default();
        qa.set_question("Why?");
        qa.lane_mut().begin().unwrap();
        assert_eq!(qa.gate(), Err(GateReason::InFlight));
    }
}
