use crate::{
    accounts::models::{Account, Character},
    credentials,
    store::{AccountStore, StoreError},
};
use hmac::digest::InvalidLength;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("incorrect password or username")]
    InvalidCredentials,
    #[error("User not found")]
    NotFound,
    #[error("account storage failure")]
    Storage(#[from] StoreError),
    #[error("failed to hash password")]
    Hash(#[from] InvalidLength),
}

/// Outcome of a successful `identify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// Existing account, password matched.
    Authenticated,
    /// Unseen username, account created.
    Registered,
}

/// Login/registration and character selection over an [`AccountStore`].
///
/// Holds no state of its own; every call loads the whole document and every
/// mutation saves it back.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

impl AccountService {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Load the document without using it.
    ///
    /// # Errors
    /// Returns the store error if the document cannot be loaded.
    pub async fn check(&self) -> Result<(), StoreError> {
        self.store.load().await.map(|_| ())
    }

    /// Log in, or register when the username is unseen.
    ///
    /// # Errors
    /// `InvalidInput` for an empty username or password, `InvalidCredentials`
    /// when the password does not match, `Storage` if the document cannot be
    /// loaded or saved, `Hash` if the new credential cannot be derived.
    #[instrument(skip(self, password))]
    pub async fn identify(&self, username: &str, password: &str) -> Result<Identity, AccountError> {
        if username.is_empty() || password.is_empty() {
            return Err(AccountError::InvalidInput("Missing password or username"));
        }

        let mut accounts = self.store.load().await?;

        if let Some(account) = accounts.get(username) {
            return if credentials::verify(password, &account.salt, &account.hash) {
                debug!("password verified");
                Ok(Identity::Authenticated)
            } else {
                warn!("password mismatch");
                Err(AccountError::InvalidCredentials)
            };
        }

        let credential = credentials::hash(password)?;
        accounts.insert(
            username.to_string(),
            Account::new(username.to_string(), credential),
        );
        self.store.save(&accounts).await?;

        info!("account registered");

        Ok(Identity::Registered)
    }

    /// Replace the account's character wholesale.
    ///
    /// # Errors
    /// `InvalidInput` for an empty field or a missing/zero level, `NotFound`
    /// for an unknown username, `Storage` on document failures.
    #[instrument(skip(self))]
    pub async fn set_character(
        &self,
        username: &str,
        name: &str,
        level: Option<u32>,
        img: &str,
    ) -> Result<Character, AccountError> {
        if username.is_empty() || name.is_empty() || img.is_empty() {
            return Err(AccountError::InvalidInput("Missing body params"));
        }
        let level = match level {
            None => return Err(AccountError::InvalidInput("Missing body params")),
            Some(0) => return Err(AccountError::InvalidInput("Level must be at least 1")),
            Some(level) => level,
        };

        let mut accounts = self.store.load().await?;
        let account = accounts.get_mut(username).ok_or(AccountError::NotFound)?;

        let character = Character {
            name: name.to_string(),
            level,
            img: img.to_string(),
        };
        account.character = Some(character.clone());

        self.store.save(&accounts).await?;

        info!("character set");

        Ok(character)
    }

    /// The account's character; `None` until one has been set.
    ///
    /// # Errors
    /// `InvalidInput` for an empty username, `NotFound` for an unknown one,
    /// `Storage` if the document cannot be loaded.
    #[instrument(skip(self))]
    pub async fn get_character(&self, username: &str) -> Result<Option<Character>, AccountError> {
        if username.is_empty() {
            return Err(AccountError::InvalidInput("Missing username"));
        }

        let mut accounts = self.store.load().await?;
        let account = accounts.remove(username).ok_or(AccountError::NotFound)?;

        Ok(account.character)
    }
}
