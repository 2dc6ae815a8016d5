//! aeon-core — Core adaptive interview engine.
//!
//! This crate defines the fundamental data model, the per-answer linguistic
//! analyzer, the question sequencer, the trait aggregator, and the session
//! manager that the entire ÆON interview system builds on.

pub mod aggregator;
pub mod analyzer;
pub mod error;
pub mod model;
pub mod report;
pub mod sequencer;
pub mod session;
pub mod vocab;
