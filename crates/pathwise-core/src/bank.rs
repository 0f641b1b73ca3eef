//! The question bank: static reference data for one questionnaire version.
//!
//! A bank is built once (usually at process start) and shared behind an
//! `Arc`. Construction validates the invariants every scorer relies on:
//! ids are positive and unique, and family sub-categories only appear under
//! their own category.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::model::Category::{
    Aptitude as APT, Environment as ENV, Interest as INT, Motivation as MOT, Personality as PER,
    StudyStyle as STU,
};
use crate::model::{
    AnswerSet, Aptitude, Category, Interest, PersonalityTrait, Question, SubCategory,
};

/// Name of the shipped questionnaire.
pub const STANDARD_BANK_NAME: &str = "Career Aptitude Assessment";
/// Version of the shipped questionnaire.
pub const STANDARD_BANK_VERSION: &str = "1.0";

/// An immutable, validated set of questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    name: String,
    version: String,
    questions: Vec<Question>,
    index: HashMap<u32, usize>,
}

impl QuestionBank {
    /// Build a bank, checking id uniqueness and sub-category families.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, AssessmentError> {
        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if question.id == 0 {
                return Err(AssessmentError::InvalidQuestionId(0));
            }
            if index.insert(question.id, position).is_some() {
                return Err(AssessmentError::DuplicateQuestion(question.id));
            }
            if let Some(sub) = question.sub_category {
                if !sub.fits(question.category) {
                    return Err(AssessmentError::SubCategoryMismatch {
                        question_id: question.id,
                        sub_category: sub,
                        category: question.category,
                    });
                }
            }
        }

        Ok(Self {
            name: name.into(),
            version: version.into(),
            questions,
            index,
        })
    }

    /// The shipped 90-item questionnaire.
    pub fn standard() -> Self {
        let questions: Vec<Question> = STANDARD_ITEMS
            .iter()
            .map(|&(id, category, sub_category, text)| Question {
                id,
                text: text.to_string(),
                category,
                sub_category: Some(sub_category),
                reverse_scored: STANDARD_REVERSE_SCORED.contains(&id),
            })
            .collect();
        let index = questions
            .iter()
            .enumerate()
            .map(|(position, q)| (q.id, position))
            .collect();

        Self {
            name: STANDARD_BANK_NAME.to_string(),
            version: STANDARD_BANK_VERSION.to_string(),
            questions,
            index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in bank order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.index.get(&id).map(|&position| &self.questions[position])
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter().filter(move |q| q.category == category)
    }

    pub fn by_sub_category(&self, sub: SubCategory) -> impl Iterator<Item = &Question> + '_ {
        self.questions
            .iter()
            .filter(move |q| q.sub_category == Some(sub))
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.by_category(category).count()
    }

    /// Number of bank questions the respondent has answered. Answers to ids
    /// outside the bank are ignored.
    pub fn answered_count(&self, answers: &AnswerSet) -> usize {
        self.questions
            .iter()
            .filter(|q| answers.contains(q.id))
            .count()
    }

    /// Ids still unanswered, in bank order.
    pub fn unanswered(&self, answers: &AnswerSet) -> Vec<u32> {
        self.questions
            .iter()
            .filter(|q| !answers.contains(q.id))
            .map(|q| q.id)
            .collect()
    }

    /// Share of the bank answered, 0-100.
    pub fn progress(&self, answers: &AnswerSet) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.answered_count(answers) as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn status(&self, answers: &AnswerSet) -> CompletionStatus {
        let answered = self.answered_count(answers);
        if answered == 0 {
            CompletionStatus::NotStarted
        } else if answered >= self.questions.len() {
            CompletionStatus::Completed
        } else {
            CompletionStatus::InProgress
        }
    }
}

/// How far a respondent got through the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionStatus::NotStarted => write!(f, "Not Started"),
            CompletionStatus::InProgress => write!(f, "In Progress"),
            CompletionStatus::Completed => write!(f, "Completed"),
        }
    }
}

// "I like having a fixed routine": agreement signals low adaptability.
const STANDARD_REVERSE_SCORED: [u32; 1] = [46];

const REALISTIC: SubCategory = SubCategory::Interest(Interest::Realistic);
const INVESTIGATIVE: SubCategory = SubCategory::Interest(Interest::Investigative);
const ARTISTIC: SubCategory = SubCategory::Interest(Interest::Artistic);
const SOCIAL: SubCategory = SubCategory::Interest(Interest::Social);
const ENTERPRISING: SubCategory = SubCategory::Interest(Interest::Enterprising);
const CONVENTIONAL: SubCategory = SubCategory::Interest(Interest::Conventional);
const LOGICAL: SubCategory = SubCategory::Aptitude(Aptitude::Logical);
const NUMERICAL: SubCategory = SubCategory::Aptitude(Aptitude::Numerical);
const VERBAL: SubCategory = SubCategory::Aptitude(Aptitude::Verbal);
const SPATIAL: SubCategory = SubCategory::Aptitude(Aptitude::Spatial);
const MEMORY: SubCategory = SubCategory::Aptitude(Aptitude::Memory);
const CRITICAL_THINKING: SubCategory = SubCategory::Aptitude(Aptitude::CriticalThinking);
const EXTROVERSION: SubCategory = SubCategory::Personality(PersonalityTrait::Extroversion);
const ADAPTABILITY: SubCategory = SubCategory::Personality(PersonalityTrait::Adaptability);
const EMOTIONAL_STABILITY: SubCategory =
    SubCategory::Personality(PersonalityTrait::EmotionalStability);
const RISK_TAKING: SubCategory = SubCategory::Personality(PersonalityTrait::RiskTaking);
const AUTONOMY: SubCategory = SubCategory::Personality(PersonalityTrait::Autonomy);
const CONSCIENTIOUSNESS: SubCategory = SubCategory::Personality(PersonalityTrait::Conscientiousness);
const GENERAL: SubCategory = SubCategory::General;

#[rustfmt::skip]
const STANDARD_ITEMS: [(u32, Category, SubCategory, &str); 90] = [
    (1, INT, REALISTIC, "I enjoy working with tools, machines, or physical objects."),
    (2, INT, REALISTIC, "I prefer learning by doing rather than only reading or listening."),
    (3, INT, REALISTIC, "Outdoor or field-based work feels more interesting than desk work."),
    (4, INT, REALISTIC, "I feel satisfied when I can see the physical result of my work."),
    (5, INT, INVESTIGATIVE, "I enjoy understanding how things work at a deeper level."),
    (6, INT, INVESTIGATIVE, "I like solving complex problems even if they take time."),
    (7, INT, INVESTIGATIVE, "Subjects like science, maths, or research-based topics interest me."),
    (8, INT, INVESTIGATIVE, "I ask why and how questions more than others around me."),
    (9, INT, ARTISTIC, "I enjoy expressing myself through art, writing, music, or design."),
    (10, INT, ARTISTIC, "I dislike rigid rules when working on creative tasks."),
    (11, INT, ARTISTIC, "I often think of unique or different ways to do things."),
    (12, INT, ARTISTIC, "I feel motivated when I can use imagination in my work."),
    (13, INT, SOCIAL, "I enjoy helping others solve their problems."),
    (14, INT, SOCIAL, "I feel comfortable explaining things to classmates or friends."),
    (15, INT, SOCIAL, "I feel satisfied when my work positively impacts people."),
    (16, INT, SOCIAL, "I prefer working with people rather than working alone all the time."),
    (17, INT, ENTERPRISING, "I like taking initiative and leading group activities."),
    (18, INT, ENTERPRISING, "I feel confident convincing others about my ideas."),
    (19, INT, ENTERPRISING, "I am interested in business, management, or leadership roles."),
    (20, INT, ENTERPRISING, "I enjoy taking responsibility for decisions."),
    (21, INT, CONVENTIONAL, "I like working in a structured and well-organized environment."),
    (22, INT, CONVENTIONAL, "I feel comfortable following clear instructions and procedures."),
    (23, INT, CONVENTIONAL, "I enjoy tasks that involve planning, organizing, or record-keeping."),
    (24, INT, CONVENTIONAL, "Accuracy and correctness are more important to me than creativity."),
    (25, APT, LOGICAL, "I can identify patterns or connections between ideas quickly."),
    (26, APT, LOGICAL, "I enjoy puzzles or problems that require logical thinking."),
    (27, APT, LOGICAL, "I can break a big problem into smaller steps easily."),
    (28, APT, NUMERICAL, "I feel comfortable working with numbers and calculations."),
    (29, APT, NUMERICAL, "I can quickly estimate or calculate things in daily life."),
    (30, APT, NUMERICAL, "Subjects involving numbers do not scare me."),
    (31, APT, VERBAL, "I can clearly express my thoughts in words."),
    (32, APT, VERBAL, "I understand what I read without much difficulty."),
    (33, APT, VERBAL, "I feel confident participating in discussions or debates."),
    (34, APT, SPATIAL, "I can easily understand diagrams, maps, or layouts."),
    (35, APT, SPATIAL, "I am good at assembling, fixing, or building things."),
    (36, APT, SPATIAL, "I can imagine how an object will look from different angles."),
    (37, APT, MEMORY, "I can remember information for exams once I understand it."),
    (38, APT, MEMORY, "I can recall what I studied even after some time."),
    (39, APT, MEMORY, "I remember instructions or steps without repeated reminders."),
    (40, APT, CRITICAL_THINKING, "I stay calm and try different approaches when a solution does not work."),
    (41, APT, CRITICAL_THINKING, "I enjoy challenges that make me think deeply."),
    (42, APT, CRITICAL_THINKING, "I can apply what I learn to real-life situations."),
    (43, PER, EXTROVERSION, "I feel energized after interacting with people for a long time."),
    (44, PER, EXTROVERSION, "I prefer discussing ideas with others rather than thinking alone."),
    (45, PER, EXTROVERSION, "I feel comfortable expressing my opinions in a group."),
    (46, PER, ADAPTABILITY, "I like having a fixed routine for my studies and daily activities."),
    (47, PER, ADAPTABILITY, "Sudden changes in plans do not disturb me much."),
    (48, PER, ADAPTABILITY, "I can adjust quickly when things do not go as planned."),
    (49, PER, EMOTIONAL_STABILITY, "I remain calm even when I am under pressure."),
    (50, PER, EMOTIONAL_STABILITY, "Failures or mistakes do not discourage me for long."),
    (51, PER, EMOTIONAL_STABILITY, "I can manage my emotions during stressful situations."),
    (52, PER, RISK_TAKING, "I am willing to try new things even if success is not guaranteed."),
    (53, PER, RISK_TAKING, "I am comfortable taking calculated risks."),
    (54, PER, RISK_TAKING, "Fear of failure does not stop me from attempting something new."),
    (55, PER, AUTONOMY, "I can take responsibility for my decisions."),
    (56, PER, AUTONOMY, "I prefer solving my problems on my own before seeking help."),
    (57, PER, AUTONOMY, "I stay motivated even when no one is supervising me."),
    (58, PER, CONSCIENTIOUSNESS, "I complete my tasks even when they feel boring or difficult."),
    (59, PER, CONSCIENTIOUSNESS, "I pay attention to details in my work."),
    (60, PER, CONSCIENTIOUSNESS, "I try to improve myself when I receive feedback."),
    (61, STU, GENERAL, "I am able to concentrate on my studies without getting distracted easily."),
    (62, STU, GENERAL, "I can study the same subject continuously for at least 45 minutes."),
    (63, STU, GENERAL, "I complete my homework and assignments on time."),
    (64, STU, GENERAL, "I revise my lessons regularly, not only before exams."),
    (65, STU, GENERAL, "I am able to manage my time well between studies and other activities."),
    (66, STU, GENERAL, "I usually plan what I need to study in advance."),
    (67, STU, GENERAL, "I feel confident about preparing for exams."),
    (68, STU, GENERAL, "I can handle academic pressure during exams."),
    (69, STU, GENERAL, "I continue studying even when the syllabus feels difficult."),
    (70, STU, GENERAL, "I am consistent with my study routine."),
    (71, STU, GENERAL, "I take responsibility for my academic performance."),
    (72, STU, GENERAL, "I am willing to improve my study habits if guided properly."),
    (73, MOT, GENERAL, "I feel motivated to work hard for my future goals."),
    (74, MOT, GENERAL, "I have a clear idea of what I want to achieve in life."),
    (75, MOT, GENERAL, "Even when results are slow, I continue putting in effort."),
    (76, MOT, GENERAL, "I do not give up easily when faced with difficulties."),
    (77, MOT, GENERAL, "I am able to stay positive during stressful academic situations."),
    (78, MOT, GENERAL, "I can manage pressure without panicking."),
    (79, MOT, GENERAL, "I recover quickly after a setback or failure."),
    (80, MOT, GENERAL, "I am open to guidance and mentoring when I feel stuck."),
    (81, MOT, GENERAL, "I believe consistent effort can improve my abilities."),
    (82, MOT, GENERAL, "I feel confident that I can shape my own future."),
    (83, ENV, GENERAL, "My family supports my education and career goals."),
    (84, ENV, GENERAL, "My family is open to different career options, not only traditional ones."),
    (85, ENV, GENERAL, "My family can support higher education if required."),
    (86, ENV, GENERAL, "I am willing to move to another city or place for better opportunities."),
    (87, ENV, GENERAL, "I am comfortable with long-term preparation for competitive exams."),
    (88, ENV, GENERAL, "I have access to guidance, coaching, or mentorship when needed."),
    (89, ENV, GENERAL, "My daily responsibilities at home do not heavily disturb my studies."),
    (90, ENV, GENERAL, "I feel my environment allows me to focus on building my future."),
];
