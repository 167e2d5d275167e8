//! # Sanrio (account & character service)
//!
//! `sanrio` keeps user accounts and the single character each account has
//! picked from a catalog of Sanrio characters.
//!
//! ## Credentials
//!
//! Passwords are never stored. Each account keeps a random 128-bit salt and
//! an HMAC-SHA256 of the password keyed with that salt, both hex encoded.
//! Logging in with an unseen username registers it on the spot.
//!
//! ## Storage
//!
//! State lives in two flat JSON documents: the character catalog (read-only,
//! keyed by character id) and the account document (keyed by username). The
//! account document is loaded and rewritten in full on every mutation, with no
//! locking: concurrent writers can lose updates and the last one wins.
//!
//! ## HTTP
//!
//! The [`api`] module exposes the services over axum. Every failure maps to a
//! short text message; storage failures never leak their details.

pub mod accounts;
pub mod api;
pub mod catalog;
pub mod cli;
pub mod credentials;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
