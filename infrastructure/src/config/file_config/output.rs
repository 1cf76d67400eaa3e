//! Output configuration from TOML (`[output]` section)

use quiz_domain::{ConfigIssue, ConfigIssueCode, OutputFormat};
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Preferred content language, e.g. "en" or "de-AT"
    pub locale: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            locale: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        match &self.locale {
            Some(locale) if locale.trim().is_empty() => vec![ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "output.locale".to_string(),
                },
                "output.locale: empty value, using 'en'",
            )],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_locale_validation() {
        let mut config = FileOutputConfig {
            locale: Some("pt-BR".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_empty());

        config.locale = Some("  ".to_string());
        assert_eq!(config.validate().len(), 1);
    }
}
