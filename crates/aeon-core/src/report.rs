//! Final report types: assembly from aggregator output, JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregator::TraitProfile;
use crate::error::InterviewError;
use crate::model::{AnsweredSlot, Session};

/// The final, immutable assessment produced once per completed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Unique report identifier.
    pub id: Uuid,
    /// The session this report belongs to (1:1).
    pub session_id: Uuid,
    /// When the report was assembled.
    pub created_at: DateTime<Utc>,
    /// Aggregated traits, scores, and recommendations.
    pub traits: TraitProfile,
    /// Full ordered list of per-slot analyses the traits were derived from.
    pub analyses: Vec<AnsweredSlot>,
}

/// Assemble a report from a session and its aggregated trait profile.
///
/// Rejects profiles whose scalar scores fall outside [0, 1] or are not
/// finite; that indicates a broken aggregation upstream and surfaces as
/// [`InterviewError::AnalysisFailure`].
pub fn assemble(session: &Session, traits: TraitProfile) -> Result<Report, InterviewError> {
    let scores = [
        ("motivation", traits.motivation_score),
        ("synergy", traits.synergy_score),
        ("flexibility", traits.flexibility_score),
        ("independence", traits.independence_score),
        ("adaptability", traits.adaptability_score),
    ];
    for (name, score) in scores {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(InterviewError::AnalysisFailure(format!(
                "{name} score out of range: {score}"
            )));
        }
    }

    Ok(Report {
        id: Uuid::new_v4(),
        session_id: session.id,
        created_at: Utc::now(),
        traits,
        analyses: session.answered.clone(),
    })
}

impl Report {
    /// Save the report as pretty JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: Report =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::model::{Session, SessionStatus, TOTAL_SLOTS};

    fn completed_session() -> Session {
        Session {
            id: Uuid::new_v4(),
            candidate_name: Some("Test Candidate".into()),
            candidate_email: None,
            current_slot: TOTAL_SLOTS + 1,
            total_slots: TOTAL_SLOTS,
            status: SessionStatus::Completed,
            started_at: Utc::now(),
            completed_at: Some(Utc::now()),
            pending_prompt: None,
            answered: Vec::new(),
            report: None,
        }
    }

    #[test]
    fn assemble_links_report_to_session() {
        let session = completed_session();
        let report = assemble(&session, aggregate(&session.answered)).unwrap();
        assert_eq!(report.session_id, session.id);
        assert!(report.analyses.is_empty());
    }

    #[test]
    fn assemble_rejects_out_of_range_scores() {
        let session = completed_session();
        let mut traits = aggregate(&session.answered);
        traits.motivation_score = f64::NAN;
        let err = assemble(&session, traits).unwrap_err();
        assert!(matches!(err, InterviewError::AnalysisFailure(_)));
    }

    #[test]
    fn json_roundtrip() {
        let session = completed_session();
        let report = assemble(&session, aggregate(&session.answered)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.save_json(&path).unwrap();
        let loaded = Report::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.session_id, session.id);
        assert_eq!(loaded.traits.archetype, report.traits.archetype);
    }
}
