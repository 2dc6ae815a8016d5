//! aeon-report — Downloadable report documents.
//!
//! Renders a completed session's report as a self-contained JSON document or
//! as human-readable Markdown, each with a suggested filename derived from
//! the session id and a timestamp.

pub mod json;
pub mod markdown;

/// A rendered export: the document content and its suggested filename.
#[derive(Debug, Clone)]
pub struct Export {
    pub content: String,
    pub filename: String,
}
