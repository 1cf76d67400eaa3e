//! Load Catalog use case
//!
//! One-shot, idempotent fetch-and-parse of the quiz content. Once a load has
//! succeeded every further call returns the cached catalog without touching
//! the provider. A failed load can be retried.

use crate::ports::content_provider::{ContentError, ContentProvider};
use quiz_domain::{Catalog, CatalogError, Family};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Errors that can occur while loading the catalog
#[derive(Error, Debug)]
pub enum LoadCatalogError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),
}

/// Observable state of the catalog load
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// No load has been attempted
    #[default]
    NotLoaded,
    /// A load is running
    Pending,
    /// The catalog is available
    Loaded(Arc<Catalog>),
    /// The last attempt failed; calling the use case again retries
    Failed(String),
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        match self {
            LoadState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }
}

/// Use case for loading the quiz catalog
pub struct LoadCatalogUseCase<P: ContentProvider + ?Sized> {
    provider: Arc<P>,
    state: Mutex<LoadState>,
}

impl<P: ContentProvider + ?Sized> LoadCatalogUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            state: Mutex::new(LoadState::NotLoaded),
        }
    }

    /// Current load state
    ///
    /// Reports [`LoadState::Pending`] while a load holds the state.
    pub fn state(&self) -> LoadState {
        match self.state.try_lock() {
            Ok(state) => state.clone(),
            Err(_) => LoadState::Pending,
        }
    }

    /// Load the catalog, or return the cached one
    ///
    /// Concurrent callers wait for the running load and share its result.
    pub async fn execute(&self) -> Result<Arc<Catalog>, LoadCatalogError> {
        let mut state = self.state.lock().await;
        if let LoadState::Loaded(catalog) = &*state {
            debug!("Catalog already loaded");
            return Ok(Arc::clone(catalog));
        }

        *state = LoadState::Pending;
        match self.fetch().await {
            Ok(catalog) => {
                *state = LoadState::Loaded(Arc::clone(&catalog));
                Ok(catalog)
            }
            Err(e) => {
                warn!("Catalog load failed: {}", e);
                *state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch(&self) -> Result<Arc<Catalog>, LoadCatalogError> {
        let (outcomes, questions) = tokio::try_join!(
            self.provider.fetch_outcomes(),
            self.provider.fetch_questions()
        )?;

        let catalog = Catalog::new(outcomes.outcomes, outcomes.attributes, questions)?;

        let dangling = catalog.dangling_attribute_ids();
        if !dangling.is_empty() {
            warn!(
                "{} attribute ids referenced by questions have no owning outcome: {:?}",
                dangling.len(),
                dangling
            );
        }
        if !catalog.is_playable() {
            warn!("Catalog has no questions or a family without outcomes; quiz cannot start");
        }

        info!(
            "Catalog loaded: {} questions, {} races, {} classes, {} backgrounds",
            catalog.question_count(),
            catalog.outcomes(Family::Race).len(),
            catalog.outcomes(Family::Class).len(),
            catalog.outcomes(Family::Background).len()
        );
        Ok(Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::content_provider::OutcomeContent;
    use async_trait::async_trait;
    use quiz_domain::{LocalizedText, Outcome, Question};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubProvider {
        calls: AtomicUsize,
        fail_first: usize,
        duplicate_questions: bool,
    }

    impl StubProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first: 0,
                duplicate_questions: false,
            }
        }

        fn failing(times: usize) -> Self {
            Self {
                fail_first: times,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl ContentProvider for StubProvider {
        async fn fetch_outcomes(&self) -> Result<OutcomeContent, ContentError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_first {
                return Err(ContentError::NotFound("dnd_data.json".to_string()));
            }
            Ok(OutcomeContent {
                outcomes: vec![
                    Outcome::new("elf", Family::Race, LocalizedText::new(), ["agile"]),
                    Outcome::new("rogue", Family::Class, LocalizedText::new(), ["agile"]),
                    Outcome::new("urchin", Family::Background, LocalizedText::new(), ["poor"]),
                ],
                attributes: BTreeMap::new(),
            })
        }

        async fn fetch_questions(&self) -> Result<Vec<Question>, ContentError> {
            let question =
                Question::new("q1", vec![vec!["agile".to_string()]], BTreeMap::new());
            if self.duplicate_questions {
                Ok(vec![question.clone(), question])
            } else {
                Ok(vec![question])
            }
        }
    }

    #[tokio::test]
    async fn test_load_success() {
        let use_case = LoadCatalogUseCase::new(Arc::new(StubProvider::new()));
        assert!(matches!(use_case.state(), LoadState::NotLoaded));

        let catalog = use_case.execute().await.unwrap();
        assert_eq!(catalog.question_count(), 1);
        assert!(use_case.state().is_loaded());
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let provider = Arc::new(StubProvider::new());
        let use_case = LoadCatalogUseCase::new(Arc::clone(&provider));

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_can_be_retried() {
        let use_case = LoadCatalogUseCase::new(Arc::new(StubProvider::failing(1)));

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, LoadCatalogError::Content(ContentError::NotFound(_))));
        match use_case.state() {
            LoadState::Failed(message) => assert!(message.contains("dnd_data.json")),
            other => panic!("expected Failed, got {:?}", other),
        }

        assert!(use_case.execute().await.is_ok());
        assert!(use_case.state().catalog().is_some());
    }

    #[tokio::test]
    async fn test_invalid_catalog_is_reported() {
        let provider = StubProvider {
            duplicate_questions: true,
            ..StubProvider::new()
        };
        let use_case = LoadCatalogUseCase::new(Arc::new(provider));

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(
            err,
            LoadCatalogError::InvalidCatalog(CatalogError::DuplicateQuestion(_))
        ));
    }
}
