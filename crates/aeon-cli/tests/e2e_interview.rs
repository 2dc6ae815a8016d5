//! End-to-end interview through the binary: five answers in, report and
//! exports out.

use assert_cmd::Command;
use predicates::prelude::*;

fn aeon() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("aeon").unwrap()
}

const ANSWERS: &str = "\
Ma passion et ma motivation portent chaque objectif, chaque rêve, chaque ambition
Mon plan suit une stratégie et une analyse posée
Je veux créer et développer des solutions qui transforment
J'ai appris de mes erreurs et j'ai surmonté et persévéré
J'aime travailler en équipe pour améliorer le collectif ensemble
";

#[test]
fn full_interview_prints_report() {
    aeon()
        .arg("run")
        .arg("--seed")
        .arg("42")
        .arg("--name")
        .arg("Ada Lovelace")
        .write_stdin(ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1/5"))
        .stdout(predicate::str::contains("Question 5/5"))
        .stdout(predicate::str::contains("Archetype: Strategist-Inspirer"))
        .stdout(predicate::str::contains("Consciousness vector: Evolutionary"))
        .stdout(predicate::str::contains("Motivation"))
        .stdout(predicate::str::contains("Team integration:"));
}

#[test]
fn full_interview_exports_json_and_markdown() {
    let dir = tempfile::tempdir().unwrap();

    aeon()
        .arg("run")
        .arg("--seed")
        .arg("7")
        .arg("--output")
        .arg(dir.path())
        .arg("--format")
        .arg("all")
        .write_stdin(ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let mut json_files = Vec::new();
    let mut md_files = Vec::new();
    for entry in std::fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("aeon_report_"), "unexpected file: {name}");
        if name.ends_with(".json") {
            json_files.push(path);
        } else if name.ends_with(".md") {
            md_files.push(path);
        }
    }
    assert_eq!(json_files.len(), 1);
    assert_eq!(md_files.len(), 1);

    // The JSON export is a self-contained, parseable document.
    let content = std::fs::read_to_string(&json_files[0]).unwrap();
    let document: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(document["session"]["session_id"].is_string());
    assert_eq!(
        document["report"]["traits"]["archetype"],
        "Strategist-Inspirer"
    );
    assert_eq!(document["report"]["analyses"].as_array().unwrap().len(), 5);

    let md = std::fs::read_to_string(&md_files[0]).unwrap();
    assert!(md.contains("# ÆON Interview Report"));
}
