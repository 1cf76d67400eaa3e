//! Configuration issue reporting.
//!
//! Config values that cannot be honored are not fatal: the loader falls back
//! to a default and reports a [`ConfigIssue`] so the binary can warn.
//!
//! # Examples
//!
//! ```
//! use quiz_domain::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
//!
//! let issue = ConfigIssue::warning(
//!     ConfigIssueCode::OutOfRange {
//!         field: "quiz.initial_questions".to_string(),
//!         value: "0".to_string(),
//!     },
//!     "quiz.initial_questions: must be at least 1, using 1",
//! );
//! assert!(!ConfigIssue::has_errors(&[issue]));
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field did not parse into its enum.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric field is outside the accepted range.
    OutOfRange { field: String, value: String },
    /// A string field that must not be empty is empty.
    EmptyValue { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    /// True if any issue is an [`Severity::Error`]
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let warning = ConfigIssue::warning(
            ConfigIssueCode::EmptyValue {
                field: "output.locale".to_string(),
            },
            "empty",
        );
        let error = ConfigIssue::error(
            ConfigIssueCode::EmptyValue {
                field: "data.dir".to_string(),
            },
            "empty",
        );

        assert!(!ConfigIssue::has_errors(std::slice::from_ref(&warning)));
        assert!(ConfigIssue::has_errors(&[warning, error]));
    }
}
