//! JSON file content provider
//!
//! Reads the outcome and question documents from a data directory.

use super::documents::{OutcomeDocument, QuestionRecord};
use async_trait::async_trait;
use quiz_application::{ContentError, ContentProvider, OutcomeContent};
use quiz_domain::Question;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default file name of the outcome document
pub const OUTCOMES_FILE: &str = "dnd_data.json";

/// Default file name of the question document
pub const QUESTIONS_FILE: &str = "dnd_questions.json";

/// Content provider reading `dnd_data.json` and `dnd_questions.json`
#[derive(Debug, Clone)]
pub struct JsonFileContentProvider {
    outcomes_path: PathBuf,
    questions_path: PathBuf,
}

impl JsonFileContentProvider {
    /// Provider for the default file names inside `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            outcomes_path: data_dir.join(OUTCOMES_FILE),
            questions_path: data_dir.join(QUESTIONS_FILE),
        }
    }

    /// Provider for explicit document paths
    pub fn with_paths(outcomes_path: impl Into<PathBuf>, questions_path: impl Into<PathBuf>) -> Self {
        Self {
            outcomes_path: outcomes_path.into(),
            questions_path: questions_path.into(),
        }
    }

    pub fn outcomes_path(&self) -> &Path {
        &self.outcomes_path
    }

    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
        let document = path.display().to_string();
        debug!("Reading {}", document);

        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ContentError::NotFound(document.clone())
            } else {
                ContentError::ReadFailed {
                    document: document.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        serde_json::from_str(&text).map_err(|e| ContentError::ParseFailed {
            document,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ContentProvider for JsonFileContentProvider {
    async fn fetch_outcomes(&self) -> Result<OutcomeContent, ContentError> {
        let document: OutcomeDocument = Self::read_document(&self.outcomes_path).await?;
        Ok(document.into_content())
    }

    async fn fetch_questions(&self) -> Result<Vec<Question>, ContentError> {
        let records: Vec<QuestionRecord> = Self::read_document(&self.questions_path).await?;
        Ok(records.into_iter().map(Question::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::LoadCatalogUseCase;
    use quiz_domain::Family;
    use std::sync::Arc;

    const OUTCOMES: &str = r#"{
        "races": [
            {"id": "elf", "name": {"en": "Elf", "de": "Elf"}, "attributeIds": ["agile"]},
            {"id": "dwarf", "name": {"en": "Dwarf", "de": "Zwerg"}, "attributeIds": ["strong"]}
        ],
        "classes": [{"id": "rogue", "name": {"en": "Rogue"}, "attributeIds": ["agile"]}],
        "backgrounds": [{"id": "soldier", "name": {"en": "Soldier"}, "attributeIds": ["strong"]}],
        "attributes": {"agile": {"en": "Agile"}, "strong": {"en": "Strong"}}
    }"#;

    const QUESTIONS: &str = r#"[
        {
            "id": "q1",
            "attributeIds": [["agile"], ["strong"]],
            "translations": {"en": {"question": "Bow or axe?", "answers": ["Bow", "Axe"]}}
        }
    ]"#;

    fn write_fixture(dir: &Path) {
        std::fs::write(dir.join(OUTCOMES_FILE), OUTCOMES).unwrap();
        std::fs::write(dir.join(QUESTIONS_FILE), QUESTIONS).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_documents() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let provider = JsonFileContentProvider::new(dir.path());

        let outcomes = provider.fetch_outcomes().await.unwrap();
        assert_eq!(outcomes.outcomes.len(), 4);
        assert_eq!(outcomes.attributes.len(), 2);

        let questions = provider.fetch_questions().await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text("en").unwrap().answers, vec!["Bow", "Axe"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = JsonFileContentProvider::new(dir.path());

        let err = provider.fetch_outcomes().await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(ref doc) if doc.contains(OUTCOMES_FILE)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        std::fs::write(dir.path().join(QUESTIONS_FILE), "[{\"id\": 1}").unwrap();
        let provider = JsonFileContentProvider::new(dir.path());

        let err = provider.fetch_questions().await.unwrap_err();
        assert!(matches!(err, ContentError::ParseFailed { .. }));
    }

    #[tokio::test]
    async fn test_load_catalog_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let use_case = LoadCatalogUseCase::new(Arc::new(JsonFileContentProvider::new(dir.path())));

        let catalog = use_case.execute().await.unwrap();
        assert!(catalog.is_playable());
        assert_eq!(
            catalog
                .outcome(Family::Race, "dwarf")
                .map(|o| o.display_name("de")),
            Some("Zwerg")
        );
        assert_eq!(catalog.attribute_name("strong", "en"), "Strong");
    }

    #[tokio::test]
    async fn test_bundled_sample_data_loads() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
        let use_case = LoadCatalogUseCase::new(Arc::new(JsonFileContentProvider::new(data_dir)));

        let catalog = use_case.execute().await.unwrap();
        assert!(catalog.is_playable());
        assert!(catalog.dangling_attribute_ids().is_empty());
        assert_eq!(catalog.outcomes(Family::Class).len(), 3);
    }
}
