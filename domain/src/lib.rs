//! Domain layer for character-quiz
//!
//! This crate contains the quiz catalog, the vote tallies and the adaptive
//! quiz engine. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! Immutable content: outcomes grouped into three families (race, class,
//! background) and a pool of questions whose answer options list attribute ids.
//!
//! ## Adaptive Quiz
//!
//! - **Initial batch**: a random selection of questions asked to everyone
//! - **Tie-break questions**: appended one at a time while a family is tied
//!
//! Randomness is injected through [`RandomSource`], so every session can be
//! replayed deterministically.

pub mod catalog;
pub mod config;
pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, Family, Outcome, Question, QuestionText};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, locale::LocalizedText};
pub use quiz::{
    FamilyResult, Progress, QuizEngine, QuizPhase, QuizResult, QuizRules, RandomSource, Scores,
    SessionState, StartOutcome, SubmitOutcome, Tally, TallyEntry, TieBreak,
};
