//! Salted password hashing.
//!
//! Hashes are Argon2 encoded strings with a random 32-byte salt. Hashing is
//! CPU-bound, so the async wrappers run it on tokio's blocking pool.

use argon2::Config;

use crate::error::AppError;

pub fn encode_password(password: &str) -> Result<String, argon2::Error> {
    let config = Config::default();
    let salt: [u8; 32] = rand::random();
    argon2::hash_encoded(password.as_bytes(), &salt, &config)
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, argon2::Error> {
    argon2::verify_encoded(password_hash, password.as_bytes())
}

pub async fn hash(password: String) -> Result<String, AppError> {
    let password_hash = tokio::task::spawn_blocking(move || encode_password(&password)).await??;
    Ok(password_hash)
}

/// Check `password` against a stored hash. A hash that cannot be decoded counts as a mismatch.
pub async fn matches(password: String, password_hash: String) -> Result<bool, AppError> {
    let result =
        tokio::task::spawn_blocking(move || verify_password(&password, &password_hash)).await?;

    match result {
        Ok(matched) => Ok(matched),
        Err(err) => {
            tracing::warn!(error = %err, "stored password hash could not be decoded");
            Ok(false)
        }
    }
}
