//! Session state of an adaptive quiz

use super::tally::Scores;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a quiz engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// No session: freshly constructed or reset
    NotStarted,
    /// Questions remain to be answered
    InProgress,
    /// Terminal until reset
    Finished,
}

impl QuizPhase {
    pub fn as_str(&self) -> &str {
        match self {
            QuizPhase::NotStarted => "not_started",
            QuizPhase::InProgress => "in_progress",
            QuizPhase::Finished => "finished",
        }
    }
}

impl std::fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mutable state of one quiz session
///
/// Owned exclusively by [`QuizEngine`](super::QuizEngine), which replaces the
/// whole value on every transition. Readers get it by shared reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub(crate) question_ids: Vec<String>,
    pub(crate) position: usize,
    pub(crate) scores: Scores,
    pub(crate) finished: bool,
    pub(crate) extra_questions: usize,
}

impl SessionState {
    pub(crate) fn new(question_ids: Vec<String>, scores: Scores) -> Self {
        Self {
            question_ids,
            position: 0,
            scores,
            finished: false,
            extra_questions: 0,
        }
    }

    /// Selected question ids in the order they are asked
    pub fn question_ids(&self) -> &[String] {
        &self.question_ids
    }

    /// Index of the next question to answer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of selected questions so far
    pub fn total(&self) -> usize {
        self.question_ids.len()
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Questions appended beyond the initial batch to break ties
    pub fn extra_questions(&self) -> usize {
        self.extra_questions
    }

    /// Id of the question awaiting an answer
    pub fn current_question_id(&self) -> Option<&str> {
        if self.finished {
            return None;
        }
        self.question_ids.get(self.position).map(String::as_str)
    }

    pub fn contains_question(&self, question_id: &str) -> bool {
        self.question_ids.iter().any(|id| id == question_id)
    }

    pub fn phase(&self) -> QuizPhase {
        if self.finished {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress
        }
    }
}

/// Progress snapshot for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Zero-based position of the current question
    pub position: usize,
    /// Selected questions so far (grows when ties are broken)
    pub total: usize,
    /// Denominator used for the progress fraction
    pub denominator: usize,
}

impl Progress {
    /// Fraction in `[0, 1]` counting the current question as in progress
    pub fn fraction(&self) -> f64 {
        ((self.position + 1) as f64 / self.denominator as f64).min(1.0)
    }

    /// Answers given so far, capped at the denominator
    pub fn answered(&self) -> usize {
        self.position.min(self.denominator)
    }

    /// Fraction in `[0, 1]` of answers given
    pub fn answered_fraction(&self) -> f64 {
        self.answered() as f64 / self.denominator.max(1) as f64
    }
}
