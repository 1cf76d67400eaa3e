//! Progress display for quiz sessions

pub mod reporter;
