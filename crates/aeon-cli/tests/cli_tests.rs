//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn aeon() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("aeon").unwrap()
}

#[test]
fn analyze_prints_analysis_record() {
    aeon()
        .arg("analyze")
        .arg("--category")
        .arg("thinking")
        .arg("--text")
        .arg("Mon plan suit une stratégie et une analyse posée")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"thinking_style\": \"strategic\""))
        .stdout(predicate::str::contains("\"sentiment_score\""));
}

#[test]
fn analyze_empty_text_gets_baseline() {
    aeon()
        .arg("analyze")
        .arg("--category")
        .arg("potential")
        .arg("--text")
        .arg("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"confidence_score\": 0.5"))
        .stdout(predicate::str::contains("\"word_count\": 0"));
}

#[test]
fn analyze_rejects_unknown_category() {
    aeon()
        .arg("analyze")
        .arg("--category")
        .arg("charisma")
        .arg("--text")
        .arg("peu importe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn run_aborts_when_input_ends_early() {
    aeon()
        .arg("run")
        .arg("--seed")
        .arg("1")
        .write_stdin("première réponse\ndeuxième réponse\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interview aborted"));
}

#[test]
fn run_rejects_unknown_export_format() {
    let dir = tempfile::tempdir().unwrap();
    aeon()
        .arg("run")
        .arg("--seed")
        .arg("1")
        .arg("--output")
        .arg(dir.path())
        .arg("--format")
        .arg("pdf")
        .write_stdin("a\nb\nc\nd\ne\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown export format"));
}
