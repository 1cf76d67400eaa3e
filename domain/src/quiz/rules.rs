//! Quiz rules: batch size, minimum length and tie resolution

use serde::{Deserialize, Serialize};

/// Number of questions drawn when a session starts
pub const DEFAULT_INITIAL_QUESTIONS: usize = 25;

/// Answers required before a tie may be broken with extra questions
pub const DEFAULT_MIN_QUESTIONS: usize = 25;

/// Parameters of the adaptive quiz
///
/// # Example
///
/// ```
/// use quiz_domain::quiz::QuizRules;
///
/// let rules = QuizRules::default();
/// assert_eq!(rules.initial_questions, 25);
/// assert_eq!(rules.min_questions, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRules {
    /// Size of the initial random batch (capped by the pool size)
    pub initial_questions: usize,
    /// Position that must be reached before tie-break questions are appended
    pub min_questions: usize,
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            initial_questions: DEFAULT_INITIAL_QUESTIONS,
            min_questions: DEFAULT_MIN_QUESTIONS,
        }
    }
}

impl QuizRules {
    pub fn with_initial_questions(mut self, count: usize) -> Self {
        self.initial_questions = count;
        self
    }

    pub fn with_min_questions(mut self, count: usize) -> Self {
        self.min_questions = count;
        self
    }

    /// Length used as the progress denominator
    ///
    /// Progress never shows complete before the minimum is reached, even if
    /// the selected sequence is shorter.
    pub fn progress_denominator(&self, total: usize) -> usize {
        total.max(self.min_questions).max(1)
    }
}

/// Fixed rule for presenting exactly one winner when a family is tied
///
/// The engine itself never resolves ties; this is applied when a result
/// is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Last tied outcome in catalog declaration order
    #[default]
    LastDeclared,
    /// First tied outcome in catalog declaration order
    FirstDeclared,
    /// Lexicographically smallest tied outcome id
    LowestId,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::LastDeclared => "last-declared",
            TieBreak::FirstDeclared => "first-declared",
            TieBreak::LowestId => "lowest-id",
        }
    }

    /// Pick one id out of tied leaders given in declaration order
    pub fn pick<'a>(&self, leaders: &[&'a str]) -> Option<&'a str> {
        match self {
            TieBreak::LastDeclared => leaders.last().copied(),
            TieBreak::FirstDeclared => leaders.first().copied(),
            TieBreak::LowestId => leaders.iter().min().copied(),
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "last-declared" | "last" => Ok(TieBreak::LastDeclared),
            "first-declared" | "first" => Ok(TieBreak::FirstDeclared),
            "lowest-id" | "id" => Ok(TieBreak::LowestId),
            _ => Err(format!(
                "Unknown tie break: {}. Valid: last-declared, first-declared, lowest-id",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_denominator() {
        let rules = QuizRules::default();
        assert_eq!(rules.progress_denominator(3), 25);
        assert_eq!(rules.progress_denominator(27), 27);
        let zero = QuizRules::default().with_min_questions(0);
        assert_eq!(zero.progress_denominator(0), 1);
    }

    #[test]
    fn test_tie_break_pick() {
        let leaders = ["wizard", "bard", "cleric"];
        assert_eq!(TieBreak::LastDeclared.pick(&leaders), Some("cleric"));
        assert_eq!(TieBreak::FirstDeclared.pick(&leaders), Some("wizard"));
        assert_eq!(TieBreak::LowestId.pick(&leaders), Some("bard"));
        assert_eq!(TieBreak::LowestId.pick(&[]), None);
    }

    #[test]
    fn test_tie_break_from_str() {
        assert_eq!(
            "first_declared".parse::<TieBreak>().unwrap(),
            TieBreak::FirstDeclared
        );
        assert_eq!("LOWEST-ID".parse::<TieBreak>().unwrap(), TieBreak::LowestId);
        assert!("random".parse::<TieBreak>().is_err());
    }

    #[test]
    fn test_tie_break_serde_kebab_case() {
        let json = serde_json::to_string(&TieBreak::LastDeclared).unwrap();
        assert_eq!(json, "\"last-declared\"");
        let parsed: TieBreak = serde_json::from_str("\"lowest-id\"").unwrap();
        assert_eq!(parsed, TieBreak::LowestId);
    }
}
