//! Progress notification port
//!
//! Defines the interface for reporting progress while a quiz runs.

use quiz_domain::{Family, Progress, QuizResult};

/// Callback for progress updates during a quiz session
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, status line, etc.)
pub trait QuizProgressNotifier: Send + Sync {
    /// Called when a session starts with its initial batch size
    fn on_quiz_started(&self, question_count: usize);

    /// Called after every accepted answer
    fn on_answer_recorded(&self, progress: &Progress);

    /// Called when a tie-break question is appended
    fn on_extra_question(&self, _question_id: &str, _tied: &[Family]) {}

    /// Called once the session is finished
    fn on_quiz_finished(&self, _result: &QuizResult) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoQuizProgress;

impl QuizProgressNotifier for NoQuizProgress {
    fn on_quiz_started(&self, _question_count: usize) {}
    fn on_answer_recorded(&self, _progress: &Progress) {}
}
