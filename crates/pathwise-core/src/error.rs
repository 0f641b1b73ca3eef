//! Assessment error types.
//!
//! These errors cover invalid reference data and invalid responses. Scoring
//! itself never fails: once an [`AnswerSet`](crate::model::AnswerSet) and a
//! [`QuestionBank`](crate::bank::QuestionBank) exist, every computation is total.

use thiserror::Error;

use crate::model::{Category, SubCategory};

/// Errors raised while building answer sets or question banks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// A Likert response outside the 1..=5 range.
    #[error("response {value} for question {question_id} is outside the 1-5 scale")]
    ResponseOutOfRange { question_id: u32, value: i64 },

    /// Question ids must be positive.
    #[error("question id must be positive, got {0}")]
    InvalidQuestionId(i64),

    /// Two questions in one bank share an id.
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(u32),

    /// A sub-category code used under a category outside its family.
    #[error("question {question_id}: sub-category {sub_category} does not belong to {category}")]
    SubCategoryMismatch {
        question_id: u32,
        sub_category: SubCategory,
        category: Category,
    },

    /// An unrecognised category code.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// An unrecognised sub-category code.
    #[error("unknown sub-category: {0}")]
    UnknownSubCategory(String),
}
