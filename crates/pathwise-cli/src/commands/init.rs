//! The `pathwise init` command.

use std::path::Path;

use anyhow::Result;

use pathwise_core::bank::QuestionBank;
use pathwise_core::model::{AnswerSet, Likert};
use pathwise_core::parser::question_bank_to_toml;

pub fn execute() -> Result<()> {
    let bank = QuestionBank::standard();

    write_if_missing(Path::new("pathwise.toml"), || Ok(SAMPLE_CONFIG.to_string()))?;
    write_if_missing(Path::new("question-bank.toml"), || {
        question_bank_to_toml(&bank)
    })?;
    write_if_missing(Path::new("answers.json"), || {
        Ok(serde_json::to_string_pretty(&sample_answers(&bank))?)
    })?;

    println!("\nNext steps:");
    println!("  1. Edit answers.json with the respondent's 1-5 responses");
    println!("  2. Run: pathwise validate --bank question-bank.toml");
    println!("  3. Run: pathwise score --answers answers.json");

    Ok(())
}

fn write_if_missing(path: &Path, content: impl FnOnce() -> Result<String>) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content()?)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

/// Every question answered neutrally.
fn sample_answers(bank: &QuestionBank) -> AnswerSet {
    let mut answers = AnswerSet::new();
    answers.fill(bank.questions().iter().map(|q| q.id), Likert::NEUTRAL);
    answers
}

const SAMPLE_CONFIG: &str = r#"# pathwise configuration

question_bank = "question-bank.toml"
# rules = "rules.toml"
output_dir = "./pathwise-reports"
default_format = "text"
"#;
