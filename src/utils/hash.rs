// src/utils/hash.rs

use crate::error::StoreError;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

/// Generates a cryptographically random 16-byte salt, base64-encoded for
/// storage alongside the digest.
pub fn generate_salt() -> String {
    let mut salt = [0u8; 16];
    OsRng.fill_bytes(&mut salt);
    BASE64.encode(salt)
}

/// Computes the stored credential digest: `SHA-256(salt_bytes || UTF8(password))`,
/// base64-encoded.
///
/// The scheme is fixed for on-disk compatibility with existing store files;
/// both inputs and output match the original layout byte for byte.
pub fn hash_password(password: &str, salt_b64: &str) -> Result<String, StoreError> {
    let salt = BASE64
        .decode(salt_b64)
        .map_err(|e| StoreError::Unavailable(format!("stored salt is not valid base64: {e}")))?;

    let mut hasher = Sha256::new();
    hasher.update(&salt);
    hasher.update(password.as_bytes());

    Ok(BASE64.encode(hasher.finalize()))
}

/// Recomputes the digest for `password` with the stored salt and compares it
/// against the stored digest.
pub fn verify_password(
    password: &str,
    salt_b64: &str,
    stored_digest: &str,
) -> Result<bool, StoreError> {
    let candidate = hash_password(password, salt_b64)?;
    Ok(candidate == stored_digest)
}
