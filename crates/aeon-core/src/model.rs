//! Core data model types for the ÆON interview engine.
//!
//! These are the fundamental types the entire system uses to represent
//! interview slots, per-answer analyses, and session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::report::Report;

/// Number of slots in every interview session. Fixed by design.
pub const TOTAL_SLOTS: u32 = 5;

/// The five interview categories, one per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personality,
    Thinking,
    Potential,
    Behavior,
    Integration,
}

impl Category {
    /// The fixed slot → category table. Slots are 1-based.
    pub fn for_slot(slot: u32) -> Option<Category> {
        match slot {
            1 => Some(Category::Personality),
            2 => Some(Category::Thinking),
            3 => Some(Category::Potential),
            4 => Some(Category::Behavior),
            5 => Some(Category::Integration),
            _ => None,
        }
    }

    /// All categories in slot order.
    pub fn all() -> [Category; TOTAL_SLOTS as usize] {
        [
            Category::Personality,
            Category::Thinking,
            Category::Potential,
            Category::Behavior,
            Category::Integration,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Personality => write!(f, "personality"),
            Category::Thinking => write!(f, "thinking"),
            Category::Potential => write!(f, "potential"),
            Category::Behavior => write!(f, "behavior"),
            Category::Integration => write!(f, "integration"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personality" => Ok(Category::Personality),
            "thinking" => Ok(Category::Thinking),
            "potential" => Ok(Category::Potential),
            "behavior" => Ok(Category::Behavior),
            "integration" => Ok(Category::Integration),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// Lifecycle state of an interview session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
    Abandoned,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::Abandoned => write!(f, "abandoned"),
        }
    }
}

/// Dominant thinking style inferred from a thinking-category answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingStyle {
    Strategic,
    Improvisational,
    Balanced,
}

impl fmt::Display for ThinkingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThinkingStyle::Strategic => write!(f, "strategic"),
            ThinkingStyle::Improvisational => write!(f, "improvisational"),
            ThinkingStyle::Balanced => write!(f, "balanced"),
        }
    }
}

/// Category-specific indicator structure. The shape is closed over the five
/// known categories; unknown categories are unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum CategoryIndicators {
    Personality {
        motivation_keywords: Vec<String>,
        motivation_level: f64,
    },
    Thinking {
        thinking_style: ThinkingStyle,
        strategic_ratio: f64,
    },
    Potential {
        potential_indicators: Vec<String>,
        potential_score: f64,
    },
    Behavior {
        learning_orientation: bool,
        resilience_level: f64,
    },
    Integration {
        team_orientation: bool,
        improvement_orientation: bool,
        integration_readiness: f64,
    },
}

/// Structured analysis of a single free-text answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// (positive hits − negative hits) / word count. Zero for empty answers.
    pub sentiment_score: f64,
    /// Clamped to [0, 1]; 0.5 baseline.
    pub confidence_score: f64,
    /// At most 10 keywords, lowercased, in first-occurrence order.
    pub keywords: Vec<String>,
    /// Whitespace-delimited token count of the raw answer.
    pub word_count: usize,
    /// Category-specific signals.
    pub indicators: CategoryIndicators,
}

/// A slot the candidate has answered: the issued prompt, the raw answer,
/// and its analysis. At most one per slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnsweredSlot {
    /// 1-based slot ordinal.
    pub slot: u32,
    pub category: Category,
    pub prompt: String,
    pub answer: String,
    pub analysis: AnalysisRecord,
}

/// A single interview session. Owned exclusively by the session manager and
/// mutated only through its operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    /// 1-based; equals `total_slots + 1` once every slot is answered.
    pub current_slot: u32,
    pub total_slots: u32,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// The issued, not-yet-answered prompt for `current_slot`. Issued lazily,
    /// at most once per slot, never regenerated.
    #[serde(default)]
    pub pending_prompt: Option<String>,
    /// Answered slots in order, contiguous from slot 1.
    #[serde(default)]
    pub answered: Vec<AnsweredSlot>,
    /// Present iff the session completed and report assembly succeeded.
    #[serde(default)]
    pub report: Option<Report>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_and_parse() {
        assert_eq!(Category::Personality.to_string(), "personality");
        assert_eq!(Category::Integration.to_string(), "integration");
        assert_eq!("thinking".parse::<Category>().unwrap(), Category::Thinking);
        assert_eq!(
            "Behavior".parse::<Category>().unwrap(),
            Category::Behavior
        );
        assert!("charisma".parse::<Category>().is_err());
    }

    #[test]
    fn slot_table_is_fixed_and_contiguous() {
        assert_eq!(Category::for_slot(1), Some(Category::Personality));
        assert_eq!(Category::for_slot(2), Some(Category::Thinking));
        assert_eq!(Category::for_slot(3), Some(Category::Potential));
        assert_eq!(Category::for_slot(4), Some(Category::Behavior));
        assert_eq!(Category::for_slot(5), Some(Category::Integration));
        assert_eq!(Category::for_slot(0), None);
        assert_eq!(Category::for_slot(6), None);
    }

    #[test]
    fn indicators_serde_is_tagged_by_category() {
        let ind = CategoryIndicators::Thinking {
            thinking_style: ThinkingStyle::Balanced,
            strategic_ratio: 0.5,
        };
        let json = serde_json::to_string(&ind).unwrap();
        assert!(json.contains("\"category\":\"thinking\""));
        assert!(json.contains("\"thinking_style\":\"balanced\""));
        let back: CategoryIndicators = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ind);
    }

    #[test]
    fn analysis_record_serde_roundtrip() {
        let record = AnalysisRecord {
            sentiment_score: 0.25,
            confidence_score: 0.6,
            keywords: vec!["projet".into(), "excellent".into()],
            word_count: 4,
            indicators: CategoryIndicators::Behavior {
                learning_orientation: true,
                resilience_level: 0.4,
            },
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: AnalysisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
