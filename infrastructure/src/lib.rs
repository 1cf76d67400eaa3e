//! Infrastructure layer for character-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: JSON content files, configuration file
//! loading, the `rand`-backed random source and the JSONL event log.

pub mod config;
pub mod content;
pub mod logging;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDataConfig, FileLogConfig, FileOutputConfig, FileQuizConfig,
};
pub use content::{JsonFileContentProvider, OUTCOMES_FILE, QUESTIONS_FILE};
pub use logging::JsonlQuizEventLogger;
pub use random::RngRandomSource;
