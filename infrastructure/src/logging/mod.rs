//! Logging infrastructure: structured quiz event logging.
//!
//! Provides [`JsonlQuizEventLogger`], a JSONL file writer that implements
//! the [`QuizEventLogger`](quiz_application::QuizEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlQuizEventLogger;
