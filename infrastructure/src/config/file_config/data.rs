//! Data configuration from TOML (`[data]` section)

use quiz_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory used when neither config nor CLI names one
pub const DEFAULT_DATA_DIR: &str = "data";

/// Raw data configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// Directory holding `dnd_data.json` and `dnd_questions.json`
    pub dir: Option<PathBuf>,
}

impl FileDataConfig {
    /// Configured directory, or `./data`
    pub fn data_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => PathBuf::from(DEFAULT_DATA_DIR),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        match &self.dir {
            Some(dir) if dir.as_os_str().is_empty() => vec![ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "data.dir".to_string(),
                },
                format!("data.dir: empty path, using '{}'", DEFAULT_DATA_DIR),
            )],
            _ => vec![],
        }
    }
}
