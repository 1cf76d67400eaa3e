//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_catalog;
pub mod run_quiz;
