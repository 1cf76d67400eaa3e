//! Application-level configuration.
//!
//! This module provides configuration types that control how the quiz use
//! cases behave: the engine rules and how tied results are presented.

use quiz_domain::{QuizRules, TieBreak};

/// Quiz behavior configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizConfig {
    /// Batch size and minimum length of a session.
    pub rules: QuizRules,
    /// Rule used to present one winner per tied family.
    pub tie_break: TieBreak,
}

impl QuizConfig {
    pub fn with_rules(mut self, rules: QuizRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
