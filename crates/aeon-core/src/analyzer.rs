//! Per-answer linguistic analysis.
//!
//! A pure function from free-text answer + category to a structured
//! [`AnalysisRecord`]: sentiment, confidence, keywords, and the
//! category-specific indicator shape. No side effects, no I/O.

use crate::model::{AnalysisRecord, Category, CategoryIndicators, ThinkingStyle};
use crate::vocab;

/// Maximum number of extracted keywords.
const MAX_KEYWORDS: usize = 10;

/// Keyword tokens this short are noise and are dropped.
const MIN_KEYWORD_CHARS: usize = 4;

/// Analyze one answer in the context of its slot category.
pub fn analyze(text: &str, category: Category) -> AnalysisRecord {
    let lower = text.to_lowercase();
    let word_count = text.split_whitespace().count();

    let (sentiment_score, confidence_score, keywords) = if word_count == 0 {
        // Empty answer: neutral sentiment, baseline confidence, no keywords.
        (0.0, 0.5, Vec::new())
    } else {
        let positive = vocab::total_hits(&lower, vocab::POSITIVE_MARKERS);
        let negative = vocab::total_hits(&lower, vocab::NEGATIVE_MARKERS);
        let sentiment = (positive as f64 - negative as f64) / word_count as f64;

        let confident = vocab::total_hits(&lower, vocab::CONFIDENCE_MARKERS);
        let uncertain = vocab::total_hits(&lower, vocab::UNCERTAINTY_MARKERS);
        let confidence =
            (0.5 + 0.1 * confident as f64 - 0.1 * uncertain as f64).clamp(0.0, 1.0);

        (sentiment, confidence, extract_keywords(&lower))
    };

    AnalysisRecord {
        sentiment_score,
        confidence_score,
        keywords,
        word_count,
        indicators: indicators_for(&lower, category),
    }
}

/// Lowercased tokens, stop-words and short tokens excluded, deduplicated in
/// first-occurrence order, truncated to [`MAX_KEYWORDS`].
fn extract_keywords(lower: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in lower.split_whitespace() {
        if token.chars().count() < MIN_KEYWORD_CHARS {
            continue;
        }
        if vocab::STOP_WORDS.contains(&token) {
            continue;
        }
        if keywords.iter().any(|k| k == token) {
            continue;
        }
        keywords.push(token.to_string());
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }
    keywords
}

fn indicators_for(lower: &str, category: Category) -> CategoryIndicators {
    match category {
        Category::Personality => {
            let matched = vocab::matched_subset(lower, vocab::MOTIVATION_POOL);
            let motivation_level = matched.len() as f64 / vocab::MOTIVATION_POOL.len() as f64;
            CategoryIndicators::Personality {
                motivation_keywords: matched,
                motivation_level,
            }
        }
        Category::Thinking => {
            let strategic = vocab::matched_subset(lower, vocab::STRATEGIC_POOL).len();
            let improvisational = vocab::matched_subset(lower, vocab::IMPROVISATION_POOL).len();
            let (thinking_style, strategic_ratio) = classify_thinking(strategic, improvisational);
            CategoryIndicators::Thinking {
                thinking_style,
                strategic_ratio,
            }
        }
        Category::Potential => {
            let matched = vocab::matched_subset(lower, vocab::POTENTIAL_POOL);
            let potential_score = matched.len() as f64 / vocab::POTENTIAL_POOL.len() as f64;
            CategoryIndicators::Potential {
                potential_indicators: matched,
                potential_score,
            }
        }
        Category::Behavior => {
            let learning = !vocab::matched_subset(lower, vocab::LEARNING_POOL).is_empty();
            let resilience_hits = vocab::matched_subset(lower, vocab::RESILIENCE_POOL).len();
            CategoryIndicators::Behavior {
                learning_orientation: learning,
                resilience_level: resilience_hits as f64 / vocab::RESILIENCE_POOL.len() as f64,
            }
        }
        Category::Integration => {
            let team_hits = vocab::matched_subset(lower, vocab::TEAM_POOL).len();
            let improvement_hits = vocab::matched_subset(lower, vocab::IMPROVEMENT_POOL).len();
            let pool_total = vocab::TEAM_POOL.len() + vocab::IMPROVEMENT_POOL.len();
            CategoryIndicators::Integration {
                team_orientation: team_hits > 0,
                improvement_orientation: improvement_hits > 0,
                integration_readiness: (team_hits + improvement_hits) as f64 / pool_total as f64,
            }
        }
    }
}

fn classify_thinking(strategic: usize, improvisational: usize) -> (ThinkingStyle, f64) {
    if strategic == 0 && improvisational == 0 {
        return (ThinkingStyle::Balanced, 0.5);
    }
    let ratio = strategic as f64 / (strategic + improvisational) as f64;
    let style = if ratio > 0.6 {
        ThinkingStyle::Strategic
    } else if ratio < 0.4 {
        ThinkingStyle::Improvisational
    } else {
        ThinkingStyle::Balanced
    };
    (style, ratio)
}
