//! Markdown report rendering, for human review.

use anyhow::{bail, Result};
use chrono::Utc;

use aeon_core::model::Session;

use crate::Export;

/// Render a completed session's report as Markdown with its suggested
/// filename.
pub fn render(session: &Session) -> Result<Export> {
    let Some(report) = &session.report else {
        bail!("session {} has no report to export", session.id);
    };
    let generated_at = Utc::now();

    let mut md = String::new();
    md.push_str("# ÆON Interview Report\n\n");
    md.push_str(&format!("**Session:** {}\n", session.id));
    if let Some(name) = &session.candidate_name {
        md.push_str(&format!("**Candidate:** {name}\n"));
    }
    if let Some(email) = &session.candidate_email {
        md.push_str(&format!("**Email:** {email}\n"));
    }
    md.push_str(&format!(
        "**Started:** {}\n",
        session.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if let Some(completed_at) = session.completed_at {
        md.push_str(&format!(
            "**Completed:** {}\n",
            completed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    md.push_str("\n---\n\n");

    let traits = &report.traits;
    md.push_str("## Profile\n\n");
    md.push_str(&format!("- **Archetype:** {}\n", traits.archetype));
    md.push_str(&format!(
        "- **Consciousness vector:** {}\n",
        traits.consciousness_vector
    ));
    md.push_str(&format!("- **Growth zone:** {}\n", traits.growth_zone));
    md.push_str(&format!("- **Genius zone:** {}\n\n", traits.genius_zone));

    md.push_str("| Score | Value |\n|-------|-------|\n");
    for (name, value) in [
        ("Motivation", traits.motivation_score),
        ("Synergy", traits.synergy_score),
        ("Flexibility", traits.flexibility_score),
        ("Independence", traits.independence_score),
        ("Adaptability", traits.adaptability_score),
    ] {
        md.push_str(&format!("| {name} | {value:.2} |\n"));
    }
    md.push('\n');

    md.push_str(&format!("**Assessment:** {}\n\n", traits.overall_assessment));

    md.push_str("## Recommendations\n\n");
    if traits.recommendations.immediate_actions.is_empty() {
        md.push_str("- No immediate actions required\n");
    } else {
        for action in &traits.recommendations.immediate_actions {
            md.push_str(&format!("- {action}\n"));
        }
    }
    for step in &traits.recommendations.development_plan {
        md.push_str(&format!("- {step}\n"));
    }
    md.push_str(&format!(
        "- Team integration: {}\n\n",
        traits.recommendations.team_integration
    ));

    md.push_str("## Questions and Answers\n\n");
    for answered in &report.analyses {
        md.push_str(&format!(
            "**{}. [{}] {}**\n\n",
            answered.slot, answered.category, answered.prompt
        ));
        md.push_str(&format!("> {}\n\n", answered.answer));
        md.push_str(&format!(
            "*Sentiment {:.2}, confidence {:.2}, keywords: {}*\n\n",
            answered.analysis.sentiment_score,
            answered.analysis.confidence_score,
            if answered.analysis.keywords.is_empty() {
                "—".to_string()
            } else {
                answered.analysis.keywords.join(", ")
            }
        ));
    }

    let filename = format!(
        "aeon_report_{}_{}.md",
        session.id,
        generated_at.format("%Y%m%d_%H%M%S")
    );
    Ok(Export {
        content: md,
        filename,
    })
}
