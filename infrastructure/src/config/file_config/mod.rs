//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod data;
mod log;
mod output;
mod quiz;

pub use data::FileDataConfig;
pub use log::FileLogConfig;
pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;

use quiz_application::QuizConfig;
use quiz_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question counts and tie-break rule
    pub quiz: FileQuizConfig,
    /// Content location
    pub data: FileDataConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Event transcript settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every issue is recoverable: the corresponding accessor falls back to
    /// a default.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.quiz.to_quiz_config().1);
        issues.extend(self.data.validate());
        issues.extend(self.output.validate());
        issues.extend(self.log.validate());

        issues
    }

    /// Application-level quiz settings, ignoring issues
    pub fn quiz_config(&self) -> QuizConfig {
        self.quiz.to_quiz_config().0
    }
}
