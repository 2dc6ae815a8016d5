//! The `aeon run` command: an interactive interview over stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use comfy_table::Table;

use aeon_core::report::Report;
use aeon_core::session::{SessionManager, SubmitOutcome};
use aeon_report::Export;

pub fn execute(
    name: Option<String>,
    email: Option<String>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let manager = match seed {
        Some(seed) => SessionManager::with_seed(seed),
        None => SessionManager::new(),
    };

    let start = manager.start(name, email);
    println!("{}", start.message);
    println!();
    println!("Question {}/{}: {}", start.slot_number, start.total, start.prompt);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let report = loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // Input ended before the interview did; the session is dead.
            manager.abandon(start.session_id)?;
            bail!("interview aborted: input ended before the final answer");
        };
        let answer = line.context("failed to read answer")?;

        match manager.submit_answer(start.session_id, &answer)? {
            SubmitOutcome::Next {
                prompt,
                slot_number,
                total,
            } => {
                println!();
                println!("Question {slot_number}/{total}: {prompt}");
            }
            SubmitOutcome::Completed {
                report, message, ..
            } => {
                println!();
                println!("{message}");
                break report;
            }
        }
    };

    print_report(&report);

    if let Some(dir) = output {
        let session = manager.snapshot(start.session_id)?;
        let exports = match format.as_str() {
            "json" => vec![aeon_report::json::render(&session)?],
            "markdown" => vec![aeon_report::markdown::render(&session)?],
            "all" => vec![
                aeon_report::json::render(&session)?,
                aeon_report::markdown::render(&session)?,
            ],
            other => bail!("unknown export format: {other} (expected json, markdown, all)"),
        };
        for export in exports {
            write_export(&dir, &export)?;
        }
    }

    Ok(())
}

fn print_report(report: &Report) {
    let traits = &report.traits;

    println!();
    println!("Archetype: {}", traits.archetype);
    println!("Consciousness vector: {}", traits.consciousness_vector);

    let mut table = Table::new();
    table.set_header(["Score", "Value"]);
    for (name, value) in [
        ("Motivation", traits.motivation_score),
        ("Synergy", traits.synergy_score),
        ("Flexibility", traits.flexibility_score),
        ("Independence", traits.independence_score),
        ("Adaptability", traits.adaptability_score),
    ] {
        table.add_row([name.to_string(), format!("{value:.2}")]);
    }
    println!("{table}");

    println!("Growth zone: {}", traits.growth_zone);
    println!("Genius zone: {}", traits.genius_zone);
    println!("Assessment: {}", traits.overall_assessment);
    for action in &traits.recommendations.immediate_actions {
        println!("Action: {action}");
    }
    println!(
        "Team integration: {}",
        traits.recommendations.team_integration
    );
}

fn write_export(dir: &Path, export: &Export) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let path = dir.join(&export.filename);
    std::fs::write(&path, &export.content)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    tracing::debug!(path = %path.display(), "report exported");
    println!("Exported {}", path.display());
    Ok(())
}
