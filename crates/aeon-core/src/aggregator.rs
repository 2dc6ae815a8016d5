//! End-of-session trait aggregation.
//!
//! Combines the ordered per-slot analysis records into scalar scores and
//! categorical labels: archetype, consciousness vector, growth/genius zones,
//! overall assessment, and recommendations. Expects five records but
//! tolerates fewer for partial sessions, falling back to neutral defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{AnsweredSlot, Category, CategoryIndicators, ThinkingStyle};

/// The five fixed archetype labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "Strategist-Inspirer")]
    StrategistInspirer,
    #[serde(rename = "Analyst-Planner")]
    AnalystPlanner,
    #[serde(rename = "Innovator-Creator")]
    InnovatorCreator,
    #[serde(rename = "Adapter-Solver")]
    AdapterSolver,
    #[serde(rename = "Harmonizer-Integrator")]
    HarmonizerIntegrator,
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Archetype::StrategistInspirer => write!(f, "Strategist-Inspirer"),
            Archetype::AnalystPlanner => write!(f, "Analyst-Planner"),
            Archetype::InnovatorCreator => write!(f, "Innovator-Creator"),
            Archetype::AdapterSolver => write!(f, "Adapter-Solver"),
            Archetype::HarmonizerIntegrator => write!(f, "Harmonizer-Integrator"),
        }
    }
}

/// Derived from behavior/integration signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsciousnessVector {
    Evolutionary,
    Collective,
    Individual,
}

impl fmt::Display for ConsciousnessVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsciousnessVector::Evolutionary => write!(f, "Evolutionary"),
            ConsciousnessVector::Collective => write!(f, "Collective"),
            ConsciousnessVector::Individual => write!(f, "Individual"),
        }
    }
}

/// Deterministic recommendation rules derived from the scalar scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub immediate_actions: Vec<String>,
    pub development_plan: Vec<String>,
    pub team_integration: String,
}

/// The aggregated candidate profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitProfile {
    pub archetype: Archetype,
    pub consciousness_vector: ConsciousnessVector,
    /// Each score is in [0, 1] by construction of its formula.
    pub motivation_score: f64,
    pub synergy_score: f64,
    pub flexibility_score: f64,
    pub independence_score: f64,
    pub adaptability_score: f64,
    pub growth_zone: String,
    pub genius_zone: String,
    pub overall_assessment: String,
    pub recommendations: Recommendations,
}

/// Aggregate the ordered per-slot analyses into a trait profile.
pub fn aggregate(slots: &[AnsweredSlot]) -> TraitProfile {
    let archetype = derive_archetype(slots);
    let consciousness_vector = derive_consciousness_vector(slots);

    let motivation_score = mean_or(motivation_levels(slots), 0.5);
    let synergy_score = mean_or(integration_readiness(slots), 0.5);
    let flexibility_score = mean_or(flexibility_values(slots), 0.6);
    let independence_score = mean_or(
        slots.iter().map(|s| s.analysis.confidence_score).collect(),
        0.5,
    );
    let adaptability_score = mean_or(resilience_levels(slots), 0.5);

    let growth_zone = derive_growth_zone(slots);
    let genius_zone = derive_genius_zone(slots);
    let overall_assessment = assess_overall(motivation_score, synergy_score);
    let recommendations = build_recommendations(
        flexibility_score,
        independence_score,
        adaptability_score,
        &growth_zone,
        &genius_zone,
    );

    TraitProfile {
        archetype,
        consciousness_vector,
        motivation_score,
        synergy_score,
        flexibility_score,
        independence_score,
        adaptability_score,
        growth_zone,
        genius_zone,
        overall_assessment,
        recommendations,
    }
}

fn mean_or(values: Vec<f64>, default: f64) -> f64 {
    if values.is_empty() {
        default
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn motivation_levels(slots: &[AnsweredSlot]) -> Vec<f64> {
    slots
        .iter()
        .filter_map(|s| match &s.analysis.indicators {
            CategoryIndicators::Personality {
                motivation_level, ..
            } => Some(*motivation_level),
            _ => None,
        })
        .collect()
}

fn integration_readiness(slots: &[AnsweredSlot]) -> Vec<f64> {
    slots
        .iter()
        .filter_map(|s| match &s.analysis.indicators {
            CategoryIndicators::Integration {
                integration_readiness,
                ..
            } => Some(*integration_readiness),
            _ => None,
        })
        .collect()
}

fn resilience_levels(slots: &[AnsweredSlot]) -> Vec<f64> {
    slots
        .iter()
        .filter_map(|s| match &s.analysis.indicators {
            CategoryIndicators::Behavior {
                resilience_level, ..
            } => Some(*resilience_level),
            _ => None,
        })
        .collect()
}

fn thinking_styles(slots: &[AnsweredSlot]) -> Vec<ThinkingStyle> {
    slots
        .iter()
        .filter_map(|s| match &s.analysis.indicators {
            CategoryIndicators::Thinking { thinking_style, .. } => Some(*thinking_style),
            _ => None,
        })
        .collect()
}

fn flexibility_values(slots: &[AnsweredSlot]) -> Vec<f64> {
    thinking_styles(slots)
        .into_iter()
        .map(|style| {
            if style == ThinkingStyle::Balanced {
                0.8
            } else {
                0.6
            }
        })
        .collect()
}

/// Fixed 5-way decision table over the majority thinking style and a
/// motivation flag.
fn derive_archetype(slots: &[AnsweredSlot]) -> Archetype {
    let styles = thinking_styles(slots);
    let strategic = styles
        .iter()
        .filter(|s| **s == ThinkingStyle::Strategic)
        .count();
    let improvisational = styles
        .iter()
        .filter(|s| **s == ThinkingStyle::Improvisational)
        .count();
    let balanced = styles.len() - strategic - improvisational;

    let motivated = motivation_levels(slots).iter().any(|level| *level > 0.5);

    if strategic > improvisational && strategic > balanced {
        if motivated {
            Archetype::StrategistInspirer
        } else {
            Archetype::AnalystPlanner
        }
    } else if improvisational > strategic && improvisational > balanced {
        if motivated {
            Archetype::InnovatorCreator
        } else {
            Archetype::AdapterSolver
        }
    } else {
        Archetype::HarmonizerIntegrator
    }
}

fn derive_consciousness_vector(slots: &[AnsweredSlot]) -> ConsciousnessVector {
    let evolutionary = slots.iter().any(|s| {
        matches!(
            s.analysis.indicators,
            CategoryIndicators::Behavior {
                learning_orientation: true,
                resilience_level,
            } if resilience_level > 0.3
        )
    });
    if evolutionary {
        return ConsciousnessVector::Evolutionary;
    }

    let collective = slots.iter().any(|s| {
        matches!(
            s.analysis.indicators,
            CategoryIndicators::Integration {
                team_orientation: true,
                ..
            }
        )
    });
    if collective {
        ConsciousnessVector::Collective
    } else {
        ConsciousnessVector::Individual
    }
}

fn category_sentiment_below(slots: &[AnsweredSlot], category: Category, bound: f64) -> bool {
    slots
        .iter()
        .any(|s| s.category == category && s.analysis.sentiment_score < bound)
}

fn category_sentiment_above(slots: &[AnsweredSlot], category: Category, bound: f64) -> bool {
    slots
        .iter()
        .any(|s| s.category == category && s.analysis.sentiment_score > bound)
}

/// Priority-ordered lookup over categories with negative sentiment.
fn derive_growth_zone(slots: &[AnsweredSlot]) -> String {
    let table = [
        (
            Category::Behavior,
            "Stress resilience and steadiness under pressure",
        ),
        (
            Category::Thinking,
            "Structured thinking and decision-making",
        ),
        (
            Category::Integration,
            "Team integration and collaborative habits",
        ),
    ];
    for (category, label) in table {
        if category_sentiment_below(slots, category, 0.0) {
            return label.to_string();
        }
    }
    "No critical growth area; a balanced profile".to_string()
}

/// Priority-ordered lookup over categories with clearly positive sentiment.
fn derive_genius_zone(slots: &[AnsweredSlot]) -> String {
    let table = [
        (
            Category::Potential,
            "Creative potential and the drive to build",
        ),
        (
            Category::Personality,
            "Motivational energy and personal drive",
        ),
        (Category::Thinking, "Analytical and strategic thinking"),
    ];
    for (category, label) in table {
        if category_sentiment_above(slots, category, 0.1) {
            return label.to_string();
        }
    }
    "Genius zone still to be revealed in deeper conversation".to_string()
}

fn assess_overall(motivation: f64, synergy: f64) -> String {
    if motivation > 0.7 && synergy > 0.7 {
        "Exceptional candidate: highly motivated and ready to amplify the team".to_string()
    } else if motivation > 0.5 && synergy > 0.5 {
        "Strong candidate: solid motivation and a good collaborative fit".to_string()
    } else {
        "Developing candidate: motivation and team fit need deliberate support".to_string()
    }
}

fn build_recommendations(
    flexibility: f64,
    independence: f64,
    adaptability: f64,
    growth_zone: &str,
    genius_zone: &str,
) -> Recommendations {
    let mut immediate_actions = Vec::new();
    if flexibility < 0.6 {
        immediate_actions.push("improve adaptive thinking".to_string());
    }
    if independence < 0.6 {
        immediate_actions.push("build decision confidence".to_string());
    }

    let development_plan = vec![
        format!("Work on the growth zone: {growth_zone}"),
        format!("Lean into the genius zone: {genius_zone}"),
    ];

    let team_integration = if adaptability > 0.7 {
        "fast integration".to_string()
    } else {
        "gradual integration with mentoring".to_string()
    };

    Recommendations {
        immediate_actions,
        development_plan,
        team_integration,
    }
}
