//! Presentation layer for character-quiz
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz interface.

pub mod cli;
pub mod output;
pub mod play;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use play::QuizRepl;
pub use progress::reporter::{ProgressMode, ProgressReporter, SimpleProgress};
