//! Application layer for character-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizConfig;
pub use ports::{
    content_provider::{ContentError, ContentProvider, OutcomeContent},
    event_logger::{NoQuizEventLogger, QuizEvent, QuizEventLogger},
    progress::{NoQuizProgress, QuizProgressNotifier},
};
pub use use_cases::load_catalog::{LoadCatalogError, LoadCatalogUseCase, LoadState};
pub use use_cases::run_quiz::RunQuizUseCase;
