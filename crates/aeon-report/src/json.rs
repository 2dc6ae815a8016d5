//! Self-contained JSON report document.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aeon_core::model::Session;
use aeon_core::report::Report;

use crate::Export;

/// The full download payload: session metadata plus the complete report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub generated_at: DateTime<Utc>,
    pub session: SessionMeta,
    pub report: Report,
}

/// Session metadata carried alongside the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub session_id: Uuid,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Build the document from a completed session.
pub fn build_document(session: &Session) -> Result<ReportDocument> {
    let Some(report) = session.report.clone() else {
        bail!("session {} has no report to export", session.id);
    };
    Ok(ReportDocument {
        generated_at: Utc::now(),
        session: SessionMeta {
            session_id: session.id,
            candidate_name: session.candidate_name.clone(),
            candidate_email: session.candidate_email.clone(),
            started_at: session.started_at,
            completed_at: session.completed_at,
        },
        report,
    })
}

/// Render the document as pretty JSON with its suggested filename.
pub fn render(session: &Session) -> Result<Export> {
    let document = build_document(session)?;
    let content = serde_json::to_string_pretty(&document)?;
    let filename = suggested_filename(session.id, document.generated_at);
    Ok(Export { content, filename })
}

fn suggested_filename(session_id: Uuid, at: DateTime<Utc>) -> String {
    format!("aeon_report_{}_{}.json", session_id, at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeon_core::model::{SessionStatus, TOTAL_SLOTS};
    use aeon_core::session::{SessionManager, SubmitOutcome};

    fn completed_session() -> Session {
        let manager = SessionManager::with_seed(1);
        let start = manager.start(Some("Ada".into()), Some("ada@example.com".into()));
        for _ in 0..TOTAL_SLOTS {
            let outcome = manager
                .submit_answer(start.session_id, "Une réponse posée et motivante")
                .unwrap();
            if let SubmitOutcome::Completed { .. } = outcome {
                break;
            }
        }
        manager.snapshot(start.session_id).unwrap()
    }

    #[test]
    fn document_carries_session_metadata() {
        let session = completed_session();
        let document = build_document(&session).unwrap();
        assert_eq!(document.session.session_id, session.id);
        assert_eq!(document.session.candidate_name.as_deref(), Some("Ada"));
        assert!(document.session.completed_at.is_some());
        assert_eq!(document.report.analyses.len(), TOTAL_SLOTS as usize);
    }

    #[test]
    fn render_produces_json_and_filename() {
        let session = completed_session();
        let export = render(&session).unwrap();

        assert!(export.filename.starts_with("aeon_report_"));
        assert!(export.filename.ends_with(".json"));
        assert!(export.filename.contains(&session.id.to_string()));

        let back: ReportDocument = serde_json::from_str(&export.content).unwrap();
        assert_eq!(back.session.session_id, session.id);
    }

    #[test]
    fn incomplete_session_cannot_be_exported() {
        let manager = SessionManager::with_seed(2);
        let start = manager.start(None, None);
        let session = manager.snapshot(start.session_id).unwrap();
        assert_eq!(session.status, SessionStatus::Active);
        assert!(render(&session).is_err());
    }
}
