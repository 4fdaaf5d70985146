//! Generic lane state machine.

use edu_core::{LaneKind, LaneStatus};
use serde::Serialize;

/// Observable state of one lane.
///
/// `result` survives re-triggers and failures: a lane that has produced a
/// result keeps showing it while a new request is in flight and after that
/// request fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneState<R> {
    pub status: LaneStatus,
    pub result: Option<R>,
    /// Display text of the most recent failure, cleared on the next trigger.
    pub last_error: Option<String>,
}

impl<R> Default for LaneState<R> {
    fn default() -> Self {
        Self {
            status: LaneStatus::Idle,
            result: None,
            last_error: None,
        }
    }
}

/// Why a trigger was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateReason {
    EmptyTopic,
    EmptyQuestion,
    InFlight,
}

impl GateReason {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::EmptyTopic => "enter a topic first",
            Self::EmptyQuestion => "enter a question first",
            Self::InFlight => "a request is already in flight",
        }
    }
}

/// Result of a trigger attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerOutcome {
    /// A request was issued, tagged with `seq`.
    Started { seq: u64 },
    /// Nothing happened; the lane is unchanged.
    Rejected(GateReason),
}

impl TriggerOutcome {
    #[must_use]
    pub const fn is_started(self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// One independently triggerable unit of work.
#[derive(Debug)]
pub struct Lane<R> {
    kind: LaneKind,
    state: LaneState<R>,
    next_seq: u64,
    outstanding: Option<u64>,
}

impl<R> Lane<R> {
    #[must_use]
    pub fn new(kind: LaneKind) -> Self {
        Self {
            kind,
            state: LaneState::default(),
            next_seq: 0,
            outstanding: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> LaneKind {
        self.kind
    }

    #[must_use]
    pub const fn state(&self) -> &LaneState<R> {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> LaneStatus {
        self.state.status
    }

    #[must_use]
    pub const fn result(&self) -> Option<&R> {
        self.state.result.as_ref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error.as_deref()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.state.status == LaneStatus::InFlight
    }

    /// Move to `in_flight` and hand out the sequence number the response
    /// must carry. The stored result is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`GateReason::InFlight`] if a request is already outstanding.
    pub fn begin(&mut self) -> Result<u64, GateReason> {
        let next = self
            .state
            .status
            .transition(self.kind, LaneStatus::InFlight)
            .map_err(|_| GateReason::InFlight)?;
        self.next_seq += 1;
        let seq = self.next_seq;
        self.state.status = next;
        self.state.last_error = None;
        self.outstanding = Some(seq);
        Ok(seq)
    }

    /// Settle the outstanding request.
    ///
    /// Returns `false` and leaves the lane untouched when `seq` is not the
    /// outstanding request. On failure the previous result is kept.
    pub fn complete(&mut self, seq: u64, outcome: Result<R, String>) -> bool {
        if self.outstanding != Some(seq) {
            tracing::debug!(
                lane = %self.kind,
                seq,
                outstanding = ?self.outstanding,
                "discarding stale response"
            );
            return false;
        }
        self.outstanding = None;

        match outcome {
            Ok(result) => {
                self.state.status = LaneStatus::Ready;
                self.state.result = Some(result);
                self.state.last_error = None;
            }
            Err(message) => {
                tracing::warn!(lane = %self.kind, seq, error = %message, "generation request failed");
                self.state.status = LaneStatus::Failed;
                self.state.last_error = Some(message);
            }
        }
        true
    }
}
