//! pathwise-core: questionnaire model, scoring, and career recommendations.
//!
//! This crate defines the question bank, the answer model, the score
//! aggregator and the rule-based recommendation engine that the pathwise
//! CLI builds on.

pub mod bank;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod recommend;
pub mod report;
pub mod scoring;
