//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Winners plus the full tally of every family
    Full,
    /// Only the winner of each family
    Winners,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => quiz_domain::OutputFormat::Full,
            OutputFormat::Winners => quiz_domain::OutputFormat::Winners,
            OutputFormat::Json => quiz_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for character-quiz
#[derive(Parser, Debug)]
#[command(name = "character-quiz")]
#[command(author, version, about = "Find your race, class and background")]
#[command(long_about = r#"
Character Quiz asks a random set of multiple-choice questions and tallies a
vote for every race, class and background matching your answers.

When a category is still tied after the minimum number of questions, one
more unused question is asked until the tie breaks or the pool runs out.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quiz.toml         Project-level config
3. ~/.config/character-quiz/config.toml   Global config

Example:
  character-quiz --data-dir ./data
  character-quiz --locale de --output full
  character-quiz --seed 42 --output json
"#)]
pub struct Cli {
    /// Directory containing dnd_data.json and dnd_questions.json
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Language for questions and names (falls back to English)
    #[arg(short, long, value_name = "CODE")]
    pub locale: Option<String>,

    /// Seed for a reproducible question order
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output format for the final result
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["character-quiz"]);
        assert!(cli.data_dir.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "character-quiz",
            "--data-dir",
            "content",
            "--locale",
            "de",
            "--seed",
            "7",
            "--output",
            "json",
            "-vv",
            "-q",
            "--no-config",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("content")));
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(cli.no_config);
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            quiz_domain::OutputFormat::from(OutputFormat::Full),
            quiz_domain::OutputFormat::Full
        );
    }
}
