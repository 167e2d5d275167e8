//! JSON file backed documents.

use super::{check_keys, AccountStore, CatalogSource, StoreError};
use crate::{accounts::models::Accounts, catalog::models::Catalog};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{debug, info_span, Instrument};

const INDENT: &[u8] = b"    ";

/// Account document stored as a single JSON file.
///
/// A missing file loads as an empty document; the first `save` creates it.
#[derive(Debug, Clone)]
pub struct JsonAccountStore {
    path: PathBuf,
}

impl JsonAccountStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AccountStore for JsonAccountStore {
    async fn load(&self) -> Result<Accounts, StoreError> {
        let span = info_span!("store.load", store.path = %self.path.display());
        let contents = match fs::read(&self.path).instrument(span).await {
            Ok(contents) => contents,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", self.path.display());
                return Ok(Accounts::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let accounts: Accounts =
            serde_json::from_slice(&contents).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        check_keys(&accounts)?;

        Ok(accounts)
    }

    async fn save(&self, accounts: &Accounts) -> Result<(), StoreError> {
        let contents = to_pretty_json(accounts)?;

        let span = info_span!("store.save", store.path = %self.path.display());
        fs::write(&self.path, contents)
            .instrument(span)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

/// Character catalog read from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalog {
    async fn load(&self) -> Result<Catalog, StoreError> {
        let span = info_span!("catalog.load", catalog.path = %self.path.display());
        let contents = fs::read(&self.path)
            .instrument(span)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_slice(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Serialize with a four-space indent.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(StoreError::Encode)?;
    Ok(buf)
}
