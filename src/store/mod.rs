//! Persistence for the account and catalog documents.
//!
//! Both documents are loaded whole. Accounts are saved whole too: there are no
//! partial updates and no locking, so two overlapping read-modify-write cycles
//! lose the first write.

use crate::{accounts::models::Accounts, catalog::models::Catalog};
use async_trait::async_trait;
use std::path::PathBuf;

pub mod json;
pub mod memory;

pub use json::{JsonAccountStore, JsonCatalog};
pub use memory::{MemoryAccountStore, StaticCatalog};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode document")]
    Encode(#[source] serde_json::Error),
    #[error("account key {key:?} does not match username {username:?}")]
    KeyMismatch { key: String, username: String },
}

/// Username-keyed account document, loaded and saved whole.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// # Errors
    /// Returns an error if the document cannot be read or is malformed.
    async fn load(&self) -> Result<Accounts, StoreError>;

    /// Replace the whole document.
    ///
    /// # Errors
    /// Returns an error if the document cannot be encoded or written.
    async fn save(&self, accounts: &Accounts) -> Result<(), StoreError>;
}

/// Read-only character catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// # Errors
    /// Returns an error if the catalog cannot be read or parsed.
    async fn load(&self) -> Result<Catalog, StoreError>;
}

/// Every key must equal the username stored under it.
///
/// # Errors
/// Returns `KeyMismatch` for the first offending entry.
pub fn check_keys(accounts: &Accounts) -> Result<(), StoreError> {
    match accounts.iter().find(|(key, account)| **key != account.username) {
        Some((key, account)) => Err(StoreError::KeyMismatch {
            key: key.clone(),
            username: account.username.clone(),
        }),
        None => Ok(()),
    }
}
