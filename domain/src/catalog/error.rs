//! Catalog validation errors

use super::family::Family;
use thiserror::Error;

/// Structural problems that make catalog data unusable
///
/// Dangling attribute references are deliberately absent: they only mean an
/// option awards no vote in some family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("Duplicate {family} outcome id: {id}")]
    DuplicateOutcome { family: Family, id: String },

    #[error("Question {0} has no answer options")]
    NoOptions(String),

    #[error(
        "Question {question} has {options} options but its '{locale}' translation lists {answers} answers"
    )]
    TranslationMismatch {
        question: String,
        locale: String,
        options: usize,
        answers: usize,
    },
}
