//! Configuration file loading for character-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHARACTER_QUIZ_*` environment variables (e.g. `CHARACTER_QUIZ_QUIZ__TIE_BREAK`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz.toml` or `./.quiz.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/character-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDataConfig, FileLogConfig, FileOutputConfig, FileQuizConfig,
};
pub use loader::ConfigLoader;
