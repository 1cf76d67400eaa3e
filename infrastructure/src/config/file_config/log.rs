//! Event log configuration from TOML (`[log]` section)

use quiz_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw event log configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL transcript of quiz events; disabled when unset
    pub events_file: Option<PathBuf>,
}

impl FileLogConfig {
    /// Transcript path, if enabled and non-empty
    pub fn events_path(&self) -> Option<&PathBuf> {
        self.events_file
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        match &self.events_file {
            Some(path) if path.as_os_str().is_empty() => vec![ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "log.events_file".to_string(),
                },
                "log.events_file: empty path, event log disabled",
            )],
            _ => vec![],
        }
    }
}
