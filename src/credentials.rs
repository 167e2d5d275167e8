//! Salted password hashing.
//!
//! A credential is a random 16-byte salt (hex) and the HMAC-SHA256 of the
//! password keyed with the salt's hex text (hex). The key is the hex text,
//! not the decoded salt bytes.

use hmac::{digest::InvalidLength, Hmac, Mac};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// 128 bits of salt entropy.
pub const SALT_BYTES: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltedHash {
    pub salt: String,
    pub hash: String,
}

fn keyed(salt: &str, password: &str) -> Result<HmacSha256, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(salt.as_bytes())?;
    mac.update(password.as_bytes());
    Ok(mac)
}

/// Derive a fresh salt and the keyed hash of `password`.
///
/// # Errors
/// Returns `InvalidLength` if the MAC rejects the salt as a key.
pub fn hash(password: &str) -> Result<SaltedHash, InvalidLength> {
    let mut bytes = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut bytes);
    let salt = hex::encode(bytes);

    let hash = hex::encode(keyed(&salt, password)?.finalize().into_bytes());

    Ok(SaltedHash { salt, hash })
}

/// Recompute the keyed hash of `password` with `salt` and compare it with
/// `expected_hash` in constant time.
///
/// A malformed `expected_hash` (not hex, wrong length) never matches.
#[must_use]
pub fn verify(password: &str, salt: &str, expected_hash: &str) -> bool {
    let Ok(expected) = hex::decode(expected_hash) else {
        return false;
    };

    keyed(salt, password).is_ok_and(|mac| mac.verify_slice(&expected).is_ok())
}
