//! Typed interview engine errors.
//!
//! Defined here so callers can classify failures without string matching:
//! not-found versus state violations versus internal analysis failures.

use thiserror::Error;
use uuid::Uuid;

use crate::model::SessionStatus;

/// Errors surfaced by the interview engine. Never swallowed, never retried.
#[derive(Debug, Error)]
pub enum InterviewError {
    /// No session with that id exists.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// The session exists but has no retrievable report.
    #[error("report not found for session {0}")]
    ReportNotFound(Uuid),

    /// Operation attempted on a non-active session.
    #[error("session is {status}, expected active")]
    InvalidState { status: SessionStatus },

    /// No pending prompt at the current slot. An internal consistency
    /// violation; should not occur in correct operation.
    #[error("no pending prompt at slot {slot}")]
    SlotMismatch { slot: u32 },

    /// Unexpected failure while aggregating or assembling the final report.
    #[error("analysis failure: {0}")]
    AnalysisFailure(String),
}

impl InterviewError {
    /// True for lookups that failed because the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            InterviewError::SessionNotFound(_) | InterviewError::ReportNotFound(_)
        )
    }

    /// True when the session's lifecycle state rejected the operation.
    pub fn is_state_violation(&self) -> bool {
        matches!(
            self,
            InterviewError::InvalidState { .. } | InterviewError::SlotMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_helpers() {
        let id = Uuid::nil();
        assert!(InterviewError::SessionNotFound(id).is_not_found());
        assert!(InterviewError::ReportNotFound(id).is_not_found());
        assert!(!InterviewError::SessionNotFound(id).is_state_violation());

        let invalid = InterviewError::InvalidState {
            status: SessionStatus::Completed,
        };
        assert!(invalid.is_state_violation());
        assert!(!invalid.is_not_found());
        assert_eq!(invalid.to_string(), "session is completed, expected active");
    }
}
