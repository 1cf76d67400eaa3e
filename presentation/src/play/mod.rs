//! Interactive quiz module
//!
//! Provides a line-based interactive interface for taking the quiz.

mod repl;

pub use repl::QuizRepl;
