//! Fixed marker vocabularies and prompt template pools.
//!
//! Everything here is immutable static configuration: the French marker
//! vocabularies the analyzer matches against, the stop-word list, and the
//! question template pools the sequencer draws from. None of it is
//! runtime-mutable.

use crate::model::Category;

/// Positive sentiment markers.
pub const POSITIVE_MARKERS: &[&str] = &[
    "excellent",
    "génial",
    "super",
    "fantastique",
    "positif",
    "bon",
    "bien",
    "motivé",
    "passionné",
];

/// Negative sentiment markers.
pub const NEGATIVE_MARKERS: &[&str] = &[
    "difficile",
    "problème",
    "négatif",
    "mauvais",
    "stress",
    "anxiété",
    "peur",
];

/// Confidence markers.
pub const CONFIDENCE_MARKERS: &[&str] = &[
    "je pense",
    "je crois",
    "peut-être",
    "probablement",
    "sûrement",
    "certainement",
];

/// Uncertainty markers. "peut-être" and "probablement" also appear in
/// [`CONFIDENCE_MARKERS`]; the overlap is part of the fixed data and the two
/// hits cancel out in the confidence formula.
pub const UNCERTAINTY_MARKERS: &[&str] = &[
    "je ne sais pas",
    "je ne suis pas sûr",
    "peut-être",
    "probablement",
];

/// Stop-words excluded from keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    "le", "la", "les", "de", "du", "des", "et", "ou", "mais", "je", "tu", "il",
    "elle", "nous", "vous", "ils", "elles",
];

/// Personality: motivation vocabulary (8 words).
pub const MOTIVATION_POOL: &[&str] = &[
    "passion",
    "motivation",
    "objectif",
    "but",
    "rêve",
    "ambition",
    "désir",
    "envie",
];

/// Thinking: strategic vocabulary (6 words).
pub const STRATEGIC_POOL: &[&str] = &[
    "plan",
    "stratégie",
    "méthode",
    "processus",
    "analyse",
    "réflexion",
];

/// Thinking: improvisation vocabulary (5 words).
pub const IMPROVISATION_POOL: &[&str] = &[
    "intuition",
    "instinct",
    "spontanéité",
    "adaptation",
    "flexibilité",
];

/// Potential vocabulary (7 words).
pub const POTENTIAL_POOL: &[&str] = &[
    "créer",
    "innover",
    "développer",
    "construire",
    "transformer",
    "améliorer",
    "contribuer",
];

/// Behavior: learning vocabulary (6 words).
pub const LEARNING_POOL: &[&str] = &[
    "appris",
    "compris",
    "réalisé",
    "découvert",
    "évolué",
    "changé",
];

/// Behavior: resilience vocabulary (5 words).
pub const RESILIENCE_POOL: &[&str] = &[
    "persévéré",
    "continué",
    "surmonté",
    "adapté",
    "résisté",
];

/// Integration: team vocabulary (5 words).
pub const TEAM_POOL: &[&str] = &[
    "équipe",
    "collaboration",
    "partage",
    "ensemble",
    "collectif",
];

/// Integration: improvement vocabulary (5 words).
pub const IMPROVEMENT_POOL: &[&str] = &[
    "améliorer",
    "optimiser",
    "perfectionner",
    "développer",
    "innover",
];

const PERSONALITY_PROMPTS: &[&str] = &[
    "Qu'est-ce qui vous passionne vraiment, dans le travail comme dans la vie ?",
    "Quelles sont les valeurs qui guident vos décisions au quotidien ?",
    "Racontez-moi un moment où vous vous êtes senti pleinement vous-même au travail.",
];

const THINKING_PROMPTS: &[&str] = &[
    "Décrivez comment vous avez abordé une situation complexe sans instructions claires.",
    "Quand vous devez décider vite, suivez-vous plutôt un plan ou votre intuition ?",
    "Comment organisez-vous votre réflexion face à un problème totalement nouveau ?",
];

const POTENTIAL_PROMPTS: &[&str] = &[
    "Si vous aviez une liberté totale, que voudriez-vous créer ou transformer ?",
    "Quelle trace aimeriez-vous laisser dans une équipe ou un projet ?",
    "Quel projet ambitieux rêvez-vous de construire un jour ?",
];

const BEHAVIOR_PROMPTS: &[&str] = &[
    "Parlez-moi d'une erreur importante et de ce que vous en avez appris.",
    "Racontez un moment où vous avez agi à la limite de vos capacités.",
    "Comment avez-vous surmonté le dernier obstacle sérieux sur votre route ?",
];

const INTEGRATION_PROMPTS: &[&str] = &[
    "Comment vous imaginez-vous contribuer à notre équipe dans six mois ?",
    "Qu'amélioreriez-vous en priorité dans une équipe que vous rejoignez ?",
    "Qu'attendez-vous d'un collectif pour donner le meilleur de vous-même ?",
];

/// Generic fallback prompt, used when a template pool is empty.
pub const FALLBACK_PROMPT: &str =
    "Parlez-moi de vous : qu'est-ce qui compte le plus pour vous en ce moment ?";

/// The template pool for a category.
pub fn prompts_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Personality => PERSONALITY_PROMPTS,
        Category::Thinking => THINKING_PROMPTS,
        Category::Potential => POTENTIAL_PROMPTS,
        Category::Behavior => BEHAVIOR_PROMPTS,
        Category::Integration => INTEGRATION_PROMPTS,
    }
}

/// Reduce a marker to its match stem: one trailing `é`/`e` is dropped when
/// the marker is longer than five characters, so inflected forms of the same
/// word family still match ("motivé" hits "motivant", "difficile" hits
/// "difficiles"). Shorter markers match verbatim.
pub fn marker_stem(marker: &str) -> &str {
    if marker.chars().count() > 5 {
        if let Some(last) = marker.chars().last() {
            if last == 'é' || last == 'e' {
                return &marker[..marker.len() - last.len_utf8()];
            }
        }
    }
    marker
}

/// Count non-overlapping occurrences of a marker's stem in lowercased text.
pub fn occurrences(text_lower: &str, marker: &str) -> usize {
    text_lower.matches(marker_stem(marker)).count()
}

/// Total occurrences of every marker in a vocabulary.
pub fn total_hits(text_lower: &str, markers: &[&str]) -> usize {
    markers.iter().map(|m| occurrences(text_lower, m)).sum()
}

/// Whether the text contains a marker's stem at all.
pub fn contains_marker(text_lower: &str, marker: &str) -> bool {
    text_lower.contains(marker_stem(marker))
}

/// The subset of a vocabulary present in the text, in pool order.
pub fn matched_subset(text_lower: &str, pool: &[&str]) -> Vec<String> {
    pool.iter()
        .filter(|m| contains_marker(text_lower, m))
        .map(|m| m.to_string())
        .collect()
}
