//! User data models and the credential request body.

use serde::Deserialize;

use crate::error::AppError;

/// Represents a user record from the database.
///
/// Maps to the `users` table. Only the salted hash of the password is stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

/// Request body shared by `POST /api/register` and `POST /api/login`.
///
/// # JSON Example
///
/// ```json
/// {
///   "username": "operator1",
///   "password": "s3cret"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Trimmed username and the password exactly as sent.
    pub fn into_parts(self) -> (String, String) {
        let username = self
            .username
            .map(|u| u.trim().to_string())
            .unwrap_or_default();
        (username, self.password.unwrap_or_default())
    }

    /// Credentials for a new account: both fields must be non-blank.
    ///
    /// The password is checked for blankness after trimming but is returned untrimmed,
    /// so surrounding whitespace stays part of the secret.
    pub fn validate_registration(self) -> Result<(String, String), AppError> {
        let (username, password) = self.into_parts();
        if username.is_empty() || password.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Username and password are required".to_string(),
            ));
        }
        Ok((username, password))
    }
}
