//! Score aggregation.
//!
//! Turns an [`AnswerSet`] into category and sub-category totals, percentages,
//! ranked interests and aptitudes, and banded personality levels. The
//! computation is a pure function of the answers and the bank.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::model::{AnswerSet, Aptitude, Category, Interest, Likert, PersonalityTrait, SubCategory};

/// Points a single question can contribute.
pub const MAX_POINTS_PER_QUESTION: u32 = 5;
/// Number of RIASEC codes reported as top interests.
pub const TOP_INTEREST_COUNT: usize = 2;
/// Maximum number of aptitudes reported as strengths.
pub const TOP_APTITUDE_LIMIT: usize = 3;
/// Minimum percentage (inclusive) for an aptitude to count as a strength.
pub const APTITUDE_THRESHOLD: f64 = 60.0;
/// Percentages below this are `Low`.
pub const MODERATE_FLOOR: f64 = 40.0;
/// Percentages at or above this are `High`.
pub const HIGH_FLOOR: f64 = 70.0;
/// Percentage of an all-neutral sub-category (3 out of 5).
pub const NEUTRAL_PERCENTAGE: f64 = 60.0;

/// Qualitative band for a personality trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitLevel {
    Low,
    Moderate,
    High,
}

impl TraitLevel {
    /// Low below 40%, Moderate from 40% up to (not including) 70%, High from 70%.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < MODERATE_FLOOR {
            TraitLevel::Low
        } else if percentage < HIGH_FLOOR {
            TraitLevel::Moderate
        } else {
            TraitLevel::High
        }
    }
}

impl fmt::Display for TraitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraitLevel::Low => write!(f, "Low"),
            TraitLevel::Moderate => write!(f, "Moderate"),
            TraitLevel::High => write!(f, "High"),
        }
    }
}

/// One level for every personality trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PersonalityProfile {
    pub extroversion: TraitLevel,
    pub adaptability: TraitLevel,
    pub emotional_stability: TraitLevel,
    pub risk_taking: TraitLevel,
    pub autonomy: TraitLevel,
    pub conscientiousness: TraitLevel,
}

impl PersonalityProfile {
    /// Build a profile by asking `level_of` for each trait.
    pub fn from_fn(mut level_of: impl FnMut(PersonalityTrait) -> TraitLevel) -> Self {
        Self {
            extroversion: level_of(PersonalityTrait::Extroversion),
            adaptability: level_of(PersonalityTrait::Adaptability),
            emotional_stability: level_of(PersonalityTrait::EmotionalStability),
            risk_taking: level_of(PersonalityTrait::RiskTaking),
            autonomy: level_of(PersonalityTrait::Autonomy),
            conscientiousness: level_of(PersonalityTrait::Conscientiousness),
        }
    }

    pub fn level(&self, personality: PersonalityTrait) -> TraitLevel {
        match personality {
            PersonalityTrait::Extroversion => self.extroversion,
            PersonalityTrait::Adaptability => self.adaptability,
            PersonalityTrait::EmotionalStability => self.emotional_stability,
            PersonalityTrait::RiskTaking => self.risk_taking,
            PersonalityTrait::Autonomy => self.autonomy,
            PersonalityTrait::Conscientiousness => self.conscientiousness,
        }
    }

    /// Traits with their levels, in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonalityTrait, TraitLevel)> + '_ {
        PersonalityTrait::ALL.into_iter().map(|t| (t, self.level(t)))
    }
}

/// Everything derived from one answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Reverse-adjusted sum per category.
    pub category_scores: BTreeMap<Category, u32>,
    /// Highest reachable sum per category.
    pub max_category_scores: BTreeMap<Category, u32>,
    pub sub_category_scores: BTreeMap<SubCategory, u32>,
    pub max_sub_category_scores: BTreeMap<SubCategory, u32>,
    /// 0-100 per sub-category. Sub-categories without questions are absent.
    pub percentages: BTreeMap<SubCategory, f64>,
    pub top_interests: Vec<Interest>,
    pub top_aptitudes: Vec<Aptitude>,
    pub personality_traits: PersonalityProfile,
}

impl ScoreResult {
    pub fn percentage(&self, sub: impl Into<SubCategory>) -> Option<f64> {
        self.percentages.get(&sub.into()).copied()
    }

    /// Category total as a share of its maximum, 0-100.
    pub fn category_percentage(&self, category: Category) -> Option<f64> {
        let score = *self.category_scores.get(&category)?;
        let max = *self.max_category_scores.get(&category)?;
        (max > 0).then(|| percentage_of(score, max))
    }
}

/// Scores answer sets against one question bank.
#[derive(Debug, Clone)]
pub struct ScoreAggregator {
    bank: Arc<QuestionBank>,
}

impl ScoreAggregator {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn compute_scores(&self, answers: &AnswerSet) -> ScoreResult {
        compute_scores(&self.bank, answers)
    }
}

/// Aggregate `answers` against `bank`.
///
/// Missing answers count as neutral (3). Reverse-scored questions contribute
/// `6 - value`. Never fails.
pub fn compute_scores(bank: &QuestionBank, answers: &AnswerSet) -> ScoreResult {
    let mut category_scores: BTreeMap<Category, u32> = BTreeMap::new();
    let mut max_category_scores: BTreeMap<Category, u32> = BTreeMap::new();
    let mut sub_category_scores: BTreeMap<SubCategory, u32> = BTreeMap::new();
    let mut max_sub_category_scores: BTreeMap<SubCategory, u32> = BTreeMap::new();
    let mut defaulted = 0usize;

    for question in bank.questions() {
        let response = answers.get(question.id).unwrap_or_else(|| {
            defaulted += 1;
            Likert::NEUTRAL
        });
        let response = if question.reverse_scored {
            response.reversed()
        } else {
            response
        };
        let points = u32::from(response.value());

        *category_scores.entry(question.category).or_default() += points;
        *max_category_scores.entry(question.category).or_default() += MAX_POINTS_PER_QUESTION;

        if let Some(sub) = question.sub_category {
            *sub_category_scores.entry(sub).or_default() += points;
            *max_sub_category_scores.entry(sub).or_default() += MAX_POINTS_PER_QUESTION;
        }
    }

    let percentages: BTreeMap<SubCategory, f64> = sub_category_scores
        .iter()
        .filter_map(|(sub, &score)| {
            let max = max_sub_category_scores.get(sub).copied().unwrap_or(0);
            (max > 0).then(|| (*sub, percentage_of(score, max)))
        })
        .collect();

    let top_interests = rank(&percentages, &Interest::ALL)
        .into_iter()
        .take(TOP_INTEREST_COUNT)
        .collect();

    let top_aptitudes = rank(&percentages, &Aptitude::ALL)
        .into_iter()
        .filter(|aptitude| {
            percentages
                .get(&SubCategory::from(*aptitude))
                .is_some_and(|pct| *pct >= APTITUDE_THRESHOLD)
        })
        .take(TOP_APTITUDE_LIMIT)
        .collect();

    let personality_traits = PersonalityProfile::from_fn(|personality| {
        let pct = percentages
            .get(&SubCategory::from(personality))
            .copied()
            .unwrap_or(NEUTRAL_PERCENTAGE);
        TraitLevel::from_percentage(pct)
    });

    tracing::debug!(
        bank = bank.name(),
        questions = bank.len(),
        answered = bank.len() - defaulted,
        defaulted,
        "computed assessment scores"
    );

    ScoreResult {
        category_scores,
        max_category_scores,
        sub_category_scores,
        max_sub_category_scores,
        percentages,
        top_interests,
        top_aptitudes,
        personality_traits,
    }
}

/// Codes that have data, highest percentage first. Ties keep the order of
/// `codes`.
fn rank<T>(percentages: &BTreeMap<SubCategory, f64>, codes: &[T]) -> Vec<T>
where
    T: Copy + Into<SubCategory>,
{
    let mut scored: Vec<(T, f64)> = codes
        .iter()
        .filter_map(|&code| percentages.get(&code.into()).map(|pct| (code, *pct)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.into_iter().map(|(code, _)| code).collect()
}

fn percentage_of(score: u32, max: u32) -> f64 {
    100.0 * f64::from(score) / f64::from(max)
}
