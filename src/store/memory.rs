//! In-memory documents for tests and embedding.

use super::{check_keys, AccountStore, CatalogSource, StoreError};
use crate::{accounts::models::Accounts, catalog::models::Catalog};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<Accounts>,
}

impl MemoryAccountStore {
    #[must_use]
    pub fn new(accounts: Accounts) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    /// Copy of the current document.
    pub async fn snapshot(&self) -> Accounts {
        self.accounts.read().await.clone()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn load(&self) -> Result<Accounts, StoreError> {
        let accounts = self.accounts.read().await.clone();
        check_keys(&accounts)?;
        Ok(accounts)
    }

    async fn save(&self, accounts: &Accounts) -> Result<(), StoreError> {
        *self.accounts.write().await = accounts.clone();
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<Catalog, StoreError> {
        Ok(self.catalog.clone())
    }
}
