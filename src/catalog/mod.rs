//! Read-only catalog of selectable characters.

pub mod models;

pub use models::{Catalog, CatalogEntry};

use crate::store::{CatalogSource, StoreError};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("not a valid Sanrio character")]
    NotFound,
    #[error("catalog storage failure")]
    Storage(#[from] StoreError),
}

#[derive(Clone)]
pub struct CharacterCatalog {
    source: Arc<dyn CatalogSource>,
}

impl std::fmt::Debug for CharacterCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterCatalog").finish_non_exhaustive()
    }
}

impl CharacterCatalog {
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// # Errors
    /// Returns `Storage` if the catalog cannot be loaded.
    pub async fn list_all(&self) -> Result<Catalog, CatalogError> {
        Ok(self.source.load().await?)
    }

    /// # Errors
    /// Returns `NotFound` for an unknown id, `Storage` if the catalog cannot be loaded.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Value, CatalogError> {
        let mut catalog = self.source.load().await?;
        catalog.remove(id).ok_or(CatalogError::NotFound)
    }
}
