//! Content provider port
//!
//! Defines how the application obtains the quiz content. Adapters fetch and
//! parse the raw documents; the application turns the parsed records into a
//! validated [`Catalog`](quiz_domain::Catalog).

use async_trait::async_trait;
use quiz_domain::{LocalizedText, Outcome, Question};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur while fetching quiz content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Failed to read {document}: {message}")]
    ReadFailed { document: String, message: String },

    #[error("Failed to parse {document}: {message}")]
    ParseFailed { document: String, message: String },

    #[error("Other error: {0}")]
    Other(String),
}

/// Parsed outcome document: all families plus the attribute dictionary
#[derive(Debug, Clone, Default)]
pub struct OutcomeContent {
    pub outcomes: Vec<Outcome>,
    pub attributes: BTreeMap<String, LocalizedText>,
}

/// Source of quiz content
///
/// The two documents are independent and may be fetched concurrently.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch the outcome catalog (families and attribute names)
    async fn fetch_outcomes(&self) -> Result<OutcomeContent, ContentError>;

    /// Fetch the question pool
    async fn fetch_questions(&self) -> Result<Vec<Question>, ContentError>;
}
