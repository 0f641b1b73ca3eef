//! Assessment reports with JSON persistence and a markdown summary.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bank::{CompletionStatus, QuestionBank};
use crate::model::{AnswerSet, Aptitude, Category, Interest, SubCategory};
use crate::recommend::{RecommendationEngine, BALANCED_PROFILE_MESSAGE};
use crate::scoring::{ScoreAggregator, ScoreResult};

/// Runs the aggregator and the recommendation engine together.
#[derive(Debug, Clone)]
pub struct Assessment {
    aggregator: ScoreAggregator,
    engine: RecommendationEngine,
}

impl Assessment {
    pub fn new(bank: Arc<QuestionBank>, engine: RecommendationEngine) -> Self {
        Self {
            aggregator: ScoreAggregator::new(bank),
            engine,
        }
    }

    /// The shipped bank with the shipped rules.
    pub fn standard() -> Self {
        Self::new(
            Arc::new(QuestionBank::standard()),
            RecommendationEngine::standard(),
        )
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> AssessmentReport {
        let bank = self.aggregator.bank();
        let scores = self.aggregator.compute_scores(answers);
        let recommendations = self.engine.recommend_for(&scores);
        let status = bank.status(answers);
        let answered = bank.answered_count(answers);

        if status != CompletionStatus::Completed {
            tracing::info!(
                answered,
                total = bank.len(),
                "scoring a partial answer set; unanswered items count as neutral"
            );
        }

        AssessmentReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                name: bank.name().to_string(),
                version: bank.version().to_string(),
                question_count: bank.len(),
            },
            status,
            answered,
            scores,
            recommendations,
        }
    }
}

/// A complete assessment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Which questionnaire produced it.
    pub bank: BankSummary,
    pub status: CompletionStatus,
    /// Number of bank questions answered.
    pub answered: usize,
    pub scores: ScoreResult,
    /// Career paths, empty for a balanced profile.
    pub recommendations: Vec<String>,
}

/// Summary of a question bank (without the questions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSummary {
    pub name: String,
    pub version: String,
    pub question_count: usize,
}

impl AssessmentReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    pub fn is_balanced_profile(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Render as a markdown summary.
    pub fn to_markdown(&self) -> String {
        let scores = &self.scores;
        let mut md = String::new();

        md.push_str("# Assessment Report\n\n");
        md.push_str(&format!(
            "**{}** v{} | {} of {} answered ({}) | {}\n\n",
            self.bank.name,
            self.bank.version,
            self.answered,
            self.bank.question_count,
            self.status,
            self.created_at.format("%Y-%m-%d %H:%M UTC")
        ));

        md.push_str("## Interest Profile (RIASEC)\n\n");
        md.push_str("| Interest | Score | % |\n");
        md.push_str("|----------|-------|---|\n");
        for interest in Interest::ALL {
            md.push_str(&score_row(scores, interest.label(), interest.into()));
        }
        md.push_str(&format!(
            "\nTop interests: {}\n\n",
            join_labels(scores.top_interests.iter().map(|i| i.label()))
        ));

        md.push_str("## Aptitude Strengths\n\n");
        md.push_str("| Aptitude | Score | % |\n");
        md.push_str("|----------|-------|---|\n");
        for aptitude in Aptitude::ALL {
            md.push_str(&score_row(scores, aptitude.label(), aptitude.into()));
        }
        md.push_str(&format!(
            "\nKey strengths: {}\n\n",
            join_labels(scores.top_aptitudes.iter().map(|a| a.label()))
        ));

        md.push_str("## Personality Snapshot\n\n");
        for (personality, level) in scores.personality_traits.iter() {
            md.push_str(&format!("- {}: {level}\n", personality.label()));
        }

        md.push_str("\n## Overall Metrics\n\n");
        for category in [
            Category::StudyStyle,
            Category::Motivation,
            Category::Environment,
        ] {
            if let Some(pct) = scores.category_percentage(category) {
                md.push_str(&format!("- {}: {pct:.0}%\n", category.label()));
            }
        }

        md.push_str("\n## Recommended Career Paths\n\n");
        if self.recommendations.is_empty() {
            md.push_str(BALANCED_PROFILE_MESSAGE);
            md.push('\n');
        } else {
            for career in &self.recommendations {
                md.push_str(&format!("- {career}\n"));
            }
        }

        md
    }
}

fn score_row(scores: &ScoreResult, label: &str, sub: SubCategory) -> String {
    let score = scores.sub_category_scores.get(&sub);
    let max = scores.max_sub_category_scores.get(&sub);
    match (score, max, scores.percentage(sub)) {
        (Some(score), Some(max), Some(pct)) => format!("| {label} | {score}/{max} | {pct:.0}% |\n"),
        _ => format!("| {label} | - | - |\n"),
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = labels.collect();
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined.join(", ")
    }
}
