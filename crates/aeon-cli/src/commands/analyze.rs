//! The `aeon analyze` command: one-off analysis of a single answer.

use anyhow::{anyhow, Result};

use aeon_core::analyzer;
use aeon_core::model::Category;

pub fn execute(category: String, text: String) -> Result<()> {
    let category: Category = category
        .parse()
        .map_err(|e: String| anyhow!(e))?;

    let record = analyzer::analyze(&text, category);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
