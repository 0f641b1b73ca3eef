//! Core data model types for pathwise.
//!
//! Categories and sub-categories are closed enums so that every lookup is
//! checked at compile time. Sub-categories come in three families (RIASEC
//! interests, aptitudes, personality traits) plus a `GENERAL` catch-all.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

/// Top-level section of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Interest,
    Aptitude,
    Personality,
    StudyStyle,
    Motivation,
    Environment,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Interest,
        Category::Aptitude,
        Category::Personality,
        Category::StudyStyle,
        Category::Motivation,
        Category::Environment,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Category::Interest => "INTEREST",
            Category::Aptitude => "APTITUDE",
            Category::Personality => "PERSONALITY",
            Category::StudyStyle => "STUDY_STYLE",
            Category::Motivation => "MOTIVATION",
            Category::Environment => "ENVIRONMENT",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Category::Interest => "Interests",
            Category::Aptitude => "Aptitude",
            Category::Personality => "Personality",
            Category::StudyStyle => "Study Style & Discipline",
            Category::Motivation => "Motivation & Stress Handling",
            Category::Environment => "Environment & Support",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalize_code(s);
        Category::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| AssessmentError::UnknownCategory(s.to_string()))
    }
}

/// RIASEC interest codes, in their declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Interest {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Interest {
    pub const ALL: [Interest; 6] = [
        Interest::Realistic,
        Interest::Investigative,
        Interest::Artistic,
        Interest::Social,
        Interest::Enterprising,
        Interest::Conventional,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Interest::Realistic => "REALISTIC",
            Interest::Investigative => "INVESTIGATIVE",
            Interest::Artistic => "ARTISTIC",
            Interest::Social => "SOCIAL",
            Interest::Enterprising => "ENTERPRISING",
            Interest::Conventional => "CONVENTIONAL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interest::Realistic => "Realistic",
            Interest::Investigative => "Investigative",
            Interest::Artistic => "Artistic",
            Interest::Social => "Social",
            Interest::Enterprising => "Enterprising",
            Interest::Conventional => "Conventional",
        }
    }
}

/// Aptitude tendencies, in their declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Aptitude {
    Logical,
    Numerical,
    Verbal,
    Spatial,
    Memory,
    CriticalThinking,
}

impl Aptitude {
    pub const ALL: [Aptitude; 6] = [
        Aptitude::Logical,
        Aptitude::Numerical,
        Aptitude::Verbal,
        Aptitude::Spatial,
        Aptitude::Memory,
        Aptitude::CriticalThinking,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Aptitude::Logical => "LOGICAL",
            Aptitude::Numerical => "NUMERICAL",
            Aptitude::Verbal => "VERBAL",
            Aptitude::Spatial => "SPATIAL",
            Aptitude::Memory => "MEMORY",
            Aptitude::CriticalThinking => "CRITICAL_THINKING",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Aptitude::Logical => "Logical",
            Aptitude::Numerical => "Numerical",
            Aptitude::Verbal => "Verbal",
            Aptitude::Spatial => "Spatial",
            Aptitude::Memory => "Memory",
            Aptitude::CriticalThinking => "Critical Thinking",
        }
    }
}

/// Personality traits, in their declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonalityTrait {
    Extroversion,
    Adaptability,
    EmotionalStability,
    RiskTaking,
    Autonomy,
    Conscientiousness,
}

impl PersonalityTrait {
    pub const ALL: [PersonalityTrait; 6] = [
        PersonalityTrait::Extroversion,
        PersonalityTrait::Adaptability,
        PersonalityTrait::EmotionalStability,
        PersonalityTrait::RiskTaking,
        PersonalityTrait::Autonomy,
        PersonalityTrait::Conscientiousness,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PersonalityTrait::Extroversion => "EXTROVERSION",
            PersonalityTrait::Adaptability => "ADAPTABILITY",
            PersonalityTrait::EmotionalStability => "EMOTIONAL_STABILITY",
            PersonalityTrait::RiskTaking => "RISK_TAKING",
            PersonalityTrait::Autonomy => "AUTONOMY",
            PersonalityTrait::Conscientiousness => "CONSCIENTIOUSNESS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PersonalityTrait::Extroversion => "Extroversion",
            PersonalityTrait::Adaptability => "Adaptability",
            PersonalityTrait::EmotionalStability => "Emotional Stability",
            PersonalityTrait::RiskTaking => "Risk Taking",
            PersonalityTrait::Autonomy => "Autonomy",
            PersonalityTrait::Conscientiousness => "Conscientiousness",
        }
    }
}

/// A finer-grained bucket inside a category.
///
/// Serialized as its bare code (`"REALISTIC"`, `"CRITICAL_THINKING"`,
/// `"GENERAL"`), so it can key JSON objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SubCategory {
    Interest(Interest),
    Aptitude(Aptitude),
    Personality(PersonalityTrait),
    /// Catch-all bucket, legal under any category.
    General,
}

impl SubCategory {
    /// Every sub-category: interests, aptitudes, traits, then `GENERAL`.
    pub fn all() -> impl Iterator<Item = SubCategory> {
        Interest::ALL
            .into_iter()
            .map(SubCategory::Interest)
            .chain(Aptitude::ALL.into_iter().map(SubCategory::Aptitude))
            .chain(PersonalityTrait::ALL.into_iter().map(SubCategory::Personality))
            .chain(std::iter::once(SubCategory::General))
    }

    /// The category this sub-category is bound to, or `None` for `GENERAL`.
    pub fn family(self) -> Option<Category> {
        match self {
            SubCategory::Interest(_) => Some(Category::Interest),
            SubCategory::Aptitude(_) => Some(Category::Aptitude),
            SubCategory::Personality(_) => Some(Category::Personality),
            SubCategory::General => None,
        }
    }

    /// Whether a question of `category` may carry this sub-category.
    pub fn fits(self, category: Category) -> bool {
        self.family().map_or(true, |family| family == category)
    }

    pub fn code(self) -> &'static str {
        match self {
            SubCategory::Interest(i) => i.code(),
            SubCategory::Aptitude(a) => a.code(),
            SubCategory::Personality(p) => p.code(),
            SubCategory::General => "GENERAL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SubCategory::Interest(i) => i.label(),
            SubCategory::Aptitude(a) => a.label(),
            SubCategory::Personality(p) => p.label(),
            SubCategory::General => "General",
        }
    }
}

impl From<Interest> for SubCategory {
    fn from(value: Interest) -> Self {
        SubCategory::Interest(value)
    }
}

impl From<Aptitude> for SubCategory {
    fn from(value: Aptitude) -> Self {
        SubCategory::Aptitude(value)
    }
}

impl From<PersonalityTrait> for SubCategory {
    fn from(value: PersonalityTrait) -> Self {
        SubCategory::Personality(value)
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SubCategory {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalize_code(s);
        SubCategory::all()
            .find(|sub| sub.code() == code)
            .ok_or_else(|| AssessmentError::UnknownSubCategory(s.to_string()))
    }
}

impl TryFrom<String> for SubCategory {
    type Error = AssessmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubCategory> for String {
    fn from(value: SubCategory) -> Self {
        value.code().to_string()
    }
}

fn normalize_code(s: &str) -> String {
    s.trim().to_uppercase().replace(['-', ' '], "_")
}

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, used as the answer key.
    pub id: u32,
    /// Statement the respondent rates.
    #[serde(default)]
    pub text: String,
    pub category: Category,
    /// Absent for items that only count toward their category total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<SubCategory>,
    /// Inverts the semantic direction of the scale (`6 - value`).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reverse_scored: bool,
}

/// A response on the 1-5 agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Likert(u8);

impl Likert {
    pub const STRONGLY_DISAGREE: Likert = Likert(1);
    pub const NEUTRAL: Likert = Likert(3);
    pub const STRONGLY_AGREE: Likert = Likert(5);

    /// Returns `None` for values outside 1..=5.
    pub fn new(value: i64) -> Option<Self> {
        if (1..=5).contains(&value) {
            Some(Likert(value as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The mirrored response: 1<->5, 2<->4, 3 fixed.
    pub fn reversed(self) -> Self {
        Likert(6 - self.0)
    }
}

impl From<Likert> for u8 {
    fn from(value: Likert) -> Self {
        value.0
    }
}

/// Responses keyed by question id. May be partial.
///
/// Values are validated on the way in, so every stored response lies in
/// 1..=5. Deserializes from a JSON object such as `{"1": 5, "46": 2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u32, i64>", into = "BTreeMap<u32, u8>")]
pub struct AnswerSet {
    responses: BTreeMap<u32, Likert>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an answer set from raw `(question_id, value)` pairs, rejecting
    /// the first invalid pair.
    pub fn from_raw<I>(pairs: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = (u32, i64)>,
    {
        let mut set = Self::new();
        for (question_id, value) in pairs {
            set.insert(question_id, value)?;
        }
        Ok(set)
    }

    /// Record a raw response, returning the previous one for that question.
    pub fn insert(&mut self, question_id: u32, value: i64) -> Result<Option<Likert>, AssessmentError> {
        if question_id == 0 {
            return Err(AssessmentError::InvalidQuestionId(0));
        }
        let likert =
            Likert::new(value).ok_or(AssessmentError::ResponseOutOfRange { question_id, value })?;
        Ok(self.responses.insert(question_id, likert))
    }

    /// Record an already-validated response.
    pub fn set(&mut self, question_id: u32, value: Likert) -> Option<Likert> {
        self.responses.insert(question_id, value)
    }

    /// Answer every id in `question_ids` with the same value.
    pub fn fill<I>(&mut self, question_ids: I, value: Likert)
    where
        I: IntoIterator<Item = u32>,
    {
        for id in question_ids {
            self.responses.insert(id, value);
        }
    }

    pub fn get(&self, question_id: u32) -> Option<Likert> {
        self.responses.get(&question_id).copied()
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.responses.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl TryFrom<BTreeMap<u32, i64>> for AnswerSet {
    type Error = AssessmentError;

    fn try_from(raw: BTreeMap<u32, i64>) -> Result<Self, Self::Error> {
        AnswerSet::from_raw(raw)
    }
}

impl From<AnswerSet> for BTreeMap<u32, u8> {
    fn from(set: AnswerSet) -> Self {
        set.responses
            .into_iter()
            .map(|(id, value)| (id, value.value()))
            .collect()
    }
}
