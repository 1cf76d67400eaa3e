//! Quiz catalog domain
//!
//! Immutable, validated in-memory view of the quiz content:
//!
//! - [`Outcome`]: a candidate result belonging to exactly one [`Family`]
//! - [`Question`]: a multiple-choice question whose options list attribute ids
//! - [`Catalog`]: the aggregate with lookup helpers used for scoring
//!
//! An attribute id connects an answer option to at most one outcome per family.
//! Lookups fail closed: a missing owner yields `None`, never an error.

pub mod entities;
pub mod error;
pub mod family;
pub mod quiz_catalog;

pub use entities::{Outcome, Question, QuestionText};
pub use error::CatalogError;
pub use family::Family;
pub use quiz_catalog::Catalog;
