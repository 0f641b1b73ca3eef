//! Question bank, answer set and rule table loaders.
//!
//! Question banks and rule tables are TOML; answer sets are JSON objects
//! mapping question ids to responses, the shape assessment front-ends store.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::model::{AnswerSet, Aptitude, Category, Interest, PersonalityTrait, Question, SubCategory};
use crate::recommend::RecommendationEngine;

/// Intermediate TOML structure for question bank files.
#[derive(Debug, Serialize, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlBankHeader {
    name: String,
    #[serde(default = "default_version")]
    version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlQuestion {
    id: u32,
    #[serde(default)]
    text: String,
    category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub_category: Option<String>,
    #[serde(default)]
    reverse_scored: bool,
}

/// Parse a TOML question bank file.
pub fn parse_question_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_question_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_question_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let category = q
                .category
                .parse::<Category>()
                .with_context(|| format!("question {}", q.id))?;
            let sub_category = q
                .sub_category
                .map(|s| s.parse::<SubCategory>())
                .transpose()
                .with_context(|| format!("question {}", q.id))?;

            Ok(Question {
                id: q.id,
                text: q.text,
                category,
                sub_category,
                reverse_scored: q.reverse_scored,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    QuestionBank::new(parsed.bank.name, parsed.bank.version, questions)
        .with_context(|| format!("invalid question bank: {}", source_path.display()))
}

/// Load the bank at `path`, or the shipped bank when no path is given.
pub fn load_question_bank(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => parse_question_bank(path),
        None => Ok(QuestionBank::standard()),
    }
}

/// Serialize a bank into the TOML format `parse_question_bank` reads.
pub fn question_bank_to_toml(bank: &QuestionBank) -> Result<String> {
    let file = TomlBankFile {
        bank: TomlBankHeader {
            name: bank.name().to_string(),
            version: bank.version().to_string(),
        },
        questions: bank
            .questions()
            .iter()
            .map(|q| TomlQuestion {
                id: q.id,
                text: q.text.clone(),
                category: q.category.code().to_string(),
                sub_category: q.sub_category.map(|s| s.code().to_string()),
                reverse_scored: q.reverse_scored,
            })
            .collect(),
    };
    toml::to_string(&file).context("failed to serialize question bank")
}

/// Parse a JSON answer file (`{"1": 5, "2": 3, ...}`).
pub fn parse_answers(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers: {}", path.display()))?;

    parse_answers_str(&content, path)
}

pub fn parse_answers_str(content: &str, source_path: &Path) -> Result<AnswerSet> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse answers: {}", source_path.display()))
}

/// Parse a TOML rule table file.
pub fn parse_rule_set(path: &Path) -> Result<RecommendationEngine> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rule table: {}", path.display()))?;

    parse_rule_set_str(&content, path)
}

/// Parse a TOML `[[rules]]` array into an engine.
pub fn parse_rule_set_str(content: &str, source_path: &Path) -> Result<RecommendationEngine> {
    let engine: RecommendationEngine = toml::from_str(content)
        .with_context(|| format!("failed to parse rule table: {}", source_path.display()))?;
    if engine.rules().is_empty() {
        tracing::warn!("rule table {} has no rules", source_path.display());
    }
    Ok(engine)
}

/// Load the rule table at `path`, or the shipped table.
pub fn load_rule_set(path: Option<&Path>) -> Result<RecommendationEngine> {
    match path {
        Some(path) => parse_rule_set(path),
        None => Ok(RecommendationEngine::standard()),
    }
}

/// A non-fatal problem found in a question bank.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Check a (structurally valid) bank for gaps that degrade its reports.
pub fn validate_question_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for question in bank.questions() {
        if question.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: "question text is empty".into(),
            });
        }
    }

    for category in Category::ALL {
        if bank.count_in(category) == 0 {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("category {category} has no questions"),
            });
        }
    }

    let missing = |sub: SubCategory| bank.by_sub_category(sub).next().is_none();

    for interest in Interest::ALL.into_iter().filter(|i| missing((*i).into())) {
        warnings.push(ValidationWarning {
            question_id: None,
            message: format!("interest {} has no questions; it can never rank", interest.code()),
        });
    }
    for aptitude in Aptitude::ALL.into_iter().filter(|a| missing((*a).into())) {
        warnings.push(ValidationWarning {
            question_id: None,
            message: format!(
                "aptitude {} has no questions; it can never be a strength",
                aptitude.code()
            ),
        });
    }
    for personality in PersonalityTrait::ALL
        .into_iter()
        .filter(|p| missing((*p).into()))
    {
        warnings.push(ValidationWarning {
            question_id: None,
            message: format!(
                "trait {} has no questions; it will always read Moderate",
                personality.code()
            ),
        });
    }

    if !bank.questions().iter().any(|q| q.reverse_scored) {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "no reverse-scored questions; acquiescence bias is not controlled".into(),
        });
    }

    warnings
}
