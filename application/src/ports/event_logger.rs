//! Port for structured quiz event logging.
//!
//! Defines the [`QuizEventLogger`] trait for recording session events
//! (start, answers, tie-break extensions, final result) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the session
//! transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured quiz event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Adapters add the timestamp.
pub struct QuizEvent {
    /// Event type identifier (e.g., "quiz_started", "answer_submitted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl QuizEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging quiz events to a structured log.
///
/// The `log` method is synchronous and non-fallible: a failing log must not
/// interrupt the quiz.
pub trait QuizEventLogger: Send + Sync {
    /// Record a quiz event.
    fn log(&self, event: QuizEvent);
}

/// No-op implementation for tests and when event logging is disabled.
pub struct NoQuizEventLogger;

impl QuizEventLogger for NoQuizEventLogger {
    fn log(&self, _event: QuizEvent) {}
}
