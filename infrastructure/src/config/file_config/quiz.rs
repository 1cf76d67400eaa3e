//! Quiz configuration from TOML (`[quiz]` section)

use quiz_application::QuizConfig;
use quiz_domain::quiz::rules::{DEFAULT_INITIAL_QUESTIONS, DEFAULT_MIN_QUESTIONS};
use quiz_domain::{ConfigIssue, ConfigIssueCode, QuizRules, TieBreak};
use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
///
/// # Example
///
/// ```toml
/// [quiz]
/// initial_questions = 25
/// min_questions = 25
/// tie_break = "last-declared"   # or "first-declared", "lowest-id"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Size of the random batch drawn at start
    pub initial_questions: usize,
    /// Answers required before tie-break questions may be appended
    pub min_questions: usize,
    /// How the reported winner is chosen among tied leaders
    pub tie_break: String,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            initial_questions: DEFAULT_INITIAL_QUESTIONS,
            min_questions: DEFAULT_MIN_QUESTIONS,
            tie_break: TieBreak::default().as_str().to_string(),
        }
    }
}

impl FileQuizConfig {
    /// Parse tie_break string into TieBreak enum
    ///
    /// Accepts: "last-declared", "last", "first-declared", "first", "lowest-id", "id"
    pub fn parse_tie_break(&self) -> (TieBreak, Vec<ConfigIssue>) {
        match self.tie_break.parse::<TieBreak>() {
            Ok(rule) => (rule, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "quiz.tie_break".to_string(),
                        value: self.tie_break.clone(),
                        valid_values: vec![
                            "last-declared".to_string(),
                            "first-declared".to_string(),
                            "lowest-id".to_string(),
                        ],
                    },
                    format!(
                        "quiz.tie_break: unknown value '{}', falling back to '{}'",
                        self.tie_break,
                        TieBreak::default()
                    ),
                );
                (TieBreak::default(), vec![issue])
            }
        }
    }

    /// Convert to [`QuizRules`]; a zero-sized batch becomes one question
    pub fn to_rules(&self) -> (QuizRules, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut initial = self.initial_questions;

        if initial == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "quiz.initial_questions".to_string(),
                    value: "0".to_string(),
                },
                "quiz.initial_questions: must be at least 1, using 1",
            ));
            initial = 1;
        }

        let rules = QuizRules::default()
            .with_initial_questions(initial)
            .with_min_questions(self.min_questions);
        (rules, issues)
    }

    pub fn to_quiz_config(&self) -> (QuizConfig, Vec<ConfigIssue>) {
        let (rules, mut issues) = self.to_rules();
        let (tie_break, tie_issues) = self.parse_tie_break();
        issues.extend(tie_issues);

        let config = QuizConfig::default()
            .with_rules(rules)
            .with_tie_break(tie_break);
        (config, issues)
    }
}
