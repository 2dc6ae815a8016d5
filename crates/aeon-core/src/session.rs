//! Session lifecycle orchestration.
//!
//! The session manager owns every session, serializes concurrent answer
//! submissions against the same session behind a per-session mutex, and
//! delegates to the analyzer, sequencer, and aggregator. Distinct sessions
//! are fully independent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregator;
use crate::analyzer;
use crate::error::InterviewError;
use crate::model::{AnsweredSlot, Category, Session, SessionStatus, TOTAL_SLOTS};
use crate::report::{self, Report};
use crate::sequencer::QuestionSequencer;

/// Shown to the candidate when the interview starts.
pub const WELCOME_MESSAGE: &str =
    "Bienvenue dans l'entretien ÆON. Répondez librement, en quelques phrases.";

/// Shown to the candidate when the interview completes.
pub const COMPLETION_MESSAGE: &str =
    "Merci ! L'entretien est terminé, votre rapport est prêt.";

/// Result of starting an interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewStart {
    pub session_id: Uuid,
    pub prompt: String,
    pub slot_number: u32,
    pub total: u32,
    pub message: String,
}

/// Result of submitting an answer: either the next prompt or the final report.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SubmitOutcome {
    Next {
        prompt: String,
        slot_number: u32,
        total: u32,
    },
    Completed {
        report: Report,
        total: u32,
        message: String,
    },
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed { .. })
    }
}

/// Read-only view of a session's progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatusView {
    pub session_id: Uuid,
    pub status: SessionStatus,
    pub slot_number: u32,
    pub total: u32,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

type SessionHandle = Arc<Mutex<Session>>;

/// Owns and orchestrates interview sessions.
pub struct SessionManager {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
    sequencer: QuestionSequencer,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::with_sequencer(QuestionSequencer::new())
    }

    /// Manager with a seeded sequencer, for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_sequencer(QuestionSequencer::with_seed(seed))
    }

    pub fn with_sequencer(sequencer: QuestionSequencer) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            sequencer,
        }
    }

    /// Create a session and issue the first prompt (slot 1, personality).
    pub fn start(
        &self,
        candidate_name: Option<String>,
        candidate_email: Option<String>,
    ) -> InterviewStart {
        let id = Uuid::new_v4();
        // Slot 1 always exists in the fixed table.
        let category = Category::for_slot(1).unwrap_or(Category::Personality);
        let prompt = self.sequencer.next_prompt(category);

        let session = Session {
            id,
            candidate_name,
            candidate_email,
            current_slot: 1,
            total_slots: TOTAL_SLOTS,
            status: SessionStatus::Active,
            started_at: Utc::now(),
            completed_at: None,
            pending_prompt: Some(prompt.clone()),
            answered: Vec::new(),
            report: None,
        };

        self.write_sessions().insert(id, Arc::new(Mutex::new(session)));
        tracing::info!(session_id = %id, "interview started");

        InterviewStart {
            session_id: id,
            prompt,
            slot_number: 1,
            total: TOTAL_SLOTS,
            message: WELCOME_MESSAGE.to_string(),
        }
    }

    /// Record an answer for the current slot and advance the session,
    /// completing it after the final slot.
    ///
    /// The per-session lock is held for the whole read-analyze-advance
    /// sequence so concurrent submissions to one session cannot double-record
    /// a slot or double-trigger report generation.
    pub fn submit_answer(
        &self,
        session_id: Uuid,
        answer: &str,
    ) -> Result<SubmitOutcome, InterviewError> {
        let handle = self.handle(session_id)?;
        let mut session = lock_session(&handle);

        if session.status != SessionStatus::Active {
            return Err(InterviewError::InvalidState {
                status: session.status,
            });
        }

        let slot = session.current_slot;
        let prompt = session
            .pending_prompt
            .take()
            .ok_or(InterviewError::SlotMismatch { slot })?;
        let category =
            Category::for_slot(slot).ok_or(InterviewError::SlotMismatch { slot })?;

        let analysis = analyzer::analyze(answer, category);
        tracing::debug!(
            session_id = %session_id,
            slot,
            %category,
            sentiment = analysis.sentiment_score,
            "answer analyzed"
        );

        session.answered.push(AnsweredSlot {
            slot,
            category,
            prompt,
            answer: answer.to_string(),
            analysis,
        });
        session.current_slot += 1;

        if session.current_slot > session.total_slots {
            // Status flips before report generation; a generation failure
            // leaves the session completed without a report, recovered
            // lazily by `report()`.
            session.status = SessionStatus::Completed;
            session.completed_at = Some(Utc::now());

            let profile = aggregator::aggregate(&session.answered);
            let report = report::assemble(&session, profile)?;
            session.report = Some(report.clone());
            tracing::info!(
                session_id = %session_id,
                archetype = %report.traits.archetype,
                "interview completed"
            );

            return Ok(SubmitOutcome::Completed {
                report,
                total: session.total_slots,
                message: COMPLETION_MESSAGE.to_string(),
            });
        }

        let next_category = Category::for_slot(session.current_slot)
            .ok_or(InterviewError::SlotMismatch {
                slot: session.current_slot,
            })?;
        let next_prompt = self.sequencer.next_prompt(next_category);
        session.pending_prompt = Some(next_prompt.clone());

        Ok(SubmitOutcome::Next {
            prompt: next_prompt,
            slot_number: session.current_slot,
            total: session.total_slots,
        })
    }

    /// Read-only progress view.
    pub fn status(&self, session_id: Uuid) -> Result<SessionStatusView, InterviewError> {
        let handle = self.handle(session_id)?;
        let session = lock_session(&handle);
        Ok(SessionStatusView {
            session_id: session.id,
            status: session.status,
            slot_number: session.current_slot.min(session.total_slots),
            total: session.total_slots,
            started_at: session.started_at,
            completed_at: session.completed_at,
        })
    }

    /// The final report of a completed session. Idempotent.
    ///
    /// A completed session found without a report (report assembly failed at
    /// completion time) is repaired here: the report is regenerated from the
    /// stored analyses and persisted.
    pub fn report(&self, session_id: Uuid) -> Result<Report, InterviewError> {
        let handle = self.handle(session_id)?;
        let mut session = lock_session(&handle);

        if session.status != SessionStatus::Completed {
            return Err(InterviewError::ReportNotFound(session_id));
        }
        if let Some(report) = &session.report {
            return Ok(report.clone());
        }

        tracing::warn!(session_id = %session_id, "completed session has no report, regenerating");
        let profile = aggregator::aggregate(&session.answered);
        let report = report::assemble(&session, profile)?;
        session.report = Some(report.clone());
        Ok(report)
    }

    /// Mark an active session abandoned. Invoked by external policies
    /// (e.g. idle timeout); the engine never abandons a session on its own.
    /// Abandoned is terminal: further submissions are rejected.
    pub fn abandon(&self, session_id: Uuid) -> Result<(), InterviewError> {
        let handle = self.handle(session_id)?;
        let mut session = lock_session(&handle);
        if session.status != SessionStatus::Active {
            return Err(InterviewError::InvalidState {
                status: session.status,
            });
        }
        session.status = SessionStatus::Abandoned;
        session.pending_prompt = None;
        tracing::info!(session_id = %session_id, "session abandoned");
        Ok(())
    }

    /// Clone of the full session state, for export and rendering.
    pub fn snapshot(&self, session_id: Uuid) -> Result<Session, InterviewError> {
        let handle = self.handle(session_id)?;
        let session = lock_session(&handle);
        Ok(session.clone())
    }

    fn handle(&self, session_id: Uuid) -> Result<SessionHandle, InterviewError> {
        self.read_sessions()
            .get(&session_id)
            .cloned()
            .ok_or(InterviewError::SessionNotFound(session_id))
    }

    fn read_sessions(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, SessionHandle>> {
        match self.sessions.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_sessions(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, SessionHandle>> {
        match self.sessions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_session(handle: &SessionHandle) -> MutexGuard<'_, Session> {
    match handle.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
