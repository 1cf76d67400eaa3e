//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The quiz engine never propagates these to its caller as failures. A
/// rejected operation is reported as
/// [`SubmitOutcome::Ignored`](crate::quiz::SubmitOutcome::Ignored) carrying
/// one of these values, and the session is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Catalog has no questions or a family without outcomes")]
    EmptyCatalog,

    #[error("No quiz session is in progress")]
    NoActiveSession,

    #[error("Quiz session is already finished")]
    SessionFinished,

    #[error("Answer index {index} is out of range ({options} options)")]
    AnswerOutOfRange { index: usize, options: usize },

    #[error("Question not found in catalog: {0}")]
    UnknownQuestion(String),
}

impl DomainError {
    /// Check if this error was caused by calling an operation in the wrong state
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            DomainError::NoActiveSession | DomainError::SessionFinished
        )
    }
}
