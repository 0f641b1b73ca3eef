//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with a private `HOME`, so no user config leaks in.
fn pathwise(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pathwise").unwrap();
    cmd.env("HOME", home)
        .env_remove("PATHWISE_QUESTION_BANK")
        .env_remove("PATHWISE_RULES")
        .env_remove("RUST_LOG");
    cmd
}

/// Investigative and Realistic items strongly agreed, everything else neutral.
fn write_answers(dir: &Path) -> PathBuf {
    let entries: Vec<String> = (1..=90)
        .map(|id| {
            let value = if id <= 8 { 5 } else { 3 };
            format!("\"{id}\": {value}")
        })
        .collect();
    let path = dir.join("answers.json");
    std::fs::write(&path, format!("{{{}}}", entries.join(", "))).unwrap();
    path
}

const MINI_BANK: &str = r#"
[bank]
name = "Mini Bank"
version = "0.3"

[[questions]]
id = 1
text = "I enjoy working with tools."
category = "INTEREST"
sub_category = "REALISTIC"

[[questions]]
id = 2
text = "I like taking initiative."
category = "INTEREST"
sub_category = "ENTERPRISING"

[[questions]]
id = 3
text = "I like having a fixed routine."
category = "PERSONALITY"
sub_category = "ADAPTABILITY"
reverse_scored = true
"#;

#[test]
fn score_text_summary() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path());

    pathwise(dir.path())
        .current_dir(dir.path())
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Career Aptitude Assessment v1.0"))
        .stdout(predicate::str::contains("90 of 90 answered (Completed)"))
        .stdout(predicate::str::contains(
            "Top interests: Realistic, Investigative",
        ))
        .stdout(predicate::str::contains("Key strengths: Logical, Numerical, Verbal"))
        .stdout(predicate::str::contains("- Engineering"))
        .stdout(predicate::str::contains("- Data Science"));
}

#[test]
fn score_json_output() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path());

    let output = pathwise(dir.path())
        .current_dir(dir.path())
        .args(["score", "--format", "json", "--answers"])
        .arg(&answers)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        report["scores"]["top_interests"],
        serde_json::json!(["REALISTIC", "INVESTIGATIVE"])
    );
    assert_eq!(report["scores"]["category_scores"]["INTEREST"], 88);
    assert_eq!(report["status"], "completed");
    let careers = report["recommendations"].as_array().unwrap();
    assert!(careers.contains(&serde_json::json!("Robotics")));
}

#[test]
fn score_markdown_output() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path());

    pathwise(dir.path())
        .current_dir(dir.path())
        .args(["score", "--format", "markdown", "--answers"])
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Assessment Report"))
        .stdout(predicate::str::contains("| Realistic | 20/20 | 100% |"));
}

#[test]
fn score_writes_report_file() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path());
    let report = dir.path().join("out").join("report.json");

    pathwise(dir.path())
        .current_dir(dir.path())
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.contains("\"recommendations\""));
}

#[test]
fn score_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path());
    std::fs::write(dir.path().join("mini.toml"), MINI_BANK).unwrap();
    std::fs::write(
        dir.path().join("pathwise.toml"),
        "question_bank = \"mini.toml\"\ndefault_format = \"markdown\"\n",
    )
    .unwrap();

    pathwise(dir.path())
        .current_dir(dir.path())
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Mini Bank** v0.3"));
}

#[test]
fn score_resolves_bank_relative_to_config_file() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path());
    let other = dir.path().join("other");
    std::fs::create_dir_all(&other).unwrap();
    std::fs::write(other.join("question-bank.toml"), MINI_BANK).unwrap();
    std::fs::write(
        other.join("pathwise.toml"),
        "question_bank = \"question-bank.toml\"\n",
    )
    .unwrap();

    pathwise(dir.path())
        .current_dir(dir.path())
        .args(["score", "--format", "markdown", "--config", "other/pathwise.toml"])
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Mini Bank** v0.3"));
}

#[test]
fn score_reads_global_config_from_home() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path());
    let home = TempDir::new().unwrap();
    let global = home.path().join(".config").join("pathwise");
    std::fs::create_dir_all(&global).unwrap();
    std::fs::write(global.join("config.toml"), "default_format = \"json\"\n").unwrap();

    // The global config is picked up from the given HOME only.
    pathwise(home.path())
        .current_dir(dir.path())
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recommendations\""));

    pathwise(dir.path())
        .current_dir(dir.path())
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Top interests:"));
}

#[test]
fn score_rejects_out_of_range_response() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("answers.json");
    std::fs::write(&answers, r#"{"1": 5, "2": 9}"#).unwrap();

    pathwise(dir.path())
        .current_dir(dir.path())
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("outside the 1-5 scale"));
}

#[test]
fn score_unknown_format() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path());

    pathwise(dir.path())
        .current_dir(dir.path())
        .args(["score", "--format", "html", "--answers"])
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn recommend_for_codes() {
    let dir = TempDir::new().unwrap();

    pathwise(dir.path())
        .args(["recommend", "--interests", "INVESTIGATIVE,REALISTIC"])
        .args(["--aptitudes", "SPATIAL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Engineering"))
        .stdout(predicate::str::contains("Civil Engineering"));
}

#[test]
fn recommend_balanced_profile() {
    let dir = TempDir::new().unwrap();

    pathwise(dir.path())
        .args(["recommend", "--interests", ""])
        .args(["--aptitudes", "MEMORY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("balanced"));
}

#[test]
fn recommend_rejects_wrong_family() {
    let dir = TempDir::new().unwrap();

    pathwise(dir.path())
        .args(["recommend", "--interests", "LOGICAL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an interest code"));
}

#[test]
fn validate_question_bank() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("mini.toml");
    std::fs::write(&bank, MINI_BANK).unwrap();

    pathwise(dir.path())
        .arg("validate")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mini Bank v0.3 (3 questions)"))
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_rejects_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("dup.toml");
    std::fs::write(
        &bank,
        r#"
[bank]
name = "Dup"

[[questions]]
id = 7
category = "INTEREST"
sub_category = "SOCIAL"

[[questions]]
id = 7
category = "INTEREST"
sub_category = "SOCIAL"
"#,
    )
    .unwrap();

    pathwise(dir.path())
        .arg("validate")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();

    pathwise(dir.path())
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn questions_filtered_by_category() {
    let dir = TempDir::new().unwrap();

    pathwise(dir.path())
        .args(["questions", "--category", "personality"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ADAPTABILITY"))
        .stdout(predicate::str::contains("18 of 90 questions"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    pathwise(dir.path())
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created pathwise.toml"))
        .stdout(predicate::str::contains("Created question-bank.toml"))
        .stdout(predicate::str::contains("Created answers.json"));

    assert!(dir.path().join("pathwise.toml").exists());

    // The generated files work with the other commands.
    pathwise(dir.path())
        .current_dir(dir.path())
        .args(["validate", "--bank", "question-bank.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(90 questions)"))
        .stdout(predicate::str::contains("Question bank valid."));

    pathwise(dir.path())
        .current_dir(dir.path())
        .args(["score", "--answers", "answers.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("90 of 90 answered"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    pathwise(dir.path())
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    pathwise(dir.path())
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    pathwise(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Career aptitude assessment"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    pathwise(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathwise"));
}
