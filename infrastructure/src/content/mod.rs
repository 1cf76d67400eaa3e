//! Content adapters: loading quiz documents.
//!
//! Provides [`JsonFileContentProvider`], which implements the
//! [`ContentProvider`](quiz_application::ContentProvider) port on top of two
//! JSON files in a data directory.

pub mod documents;
mod json_provider;

pub use documents::{OutcomeDocument, OutcomeRecord, QuestionRecord};
pub use json_provider::{JsonFileContentProvider, OUTCOMES_FILE, QUESTIONS_FILE};
