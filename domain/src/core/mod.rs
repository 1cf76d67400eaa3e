//! Core domain concepts shared across all subdomains.
//!
//! - [`locale::LocalizedText`]: locale code to display text, with English fallback
//! - [`error::DomainError`]: reasons an engine operation was rejected

pub mod error;
pub mod locale;
