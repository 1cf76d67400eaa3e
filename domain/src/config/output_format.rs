//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for quiz results
///
/// This is a domain concept representing how a finished quiz is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Winners plus the full tally of every family
    Full,
    /// Only the winner of each family (default)
    #[default]
    Winners,
    /// JSON output
    Json,
}
