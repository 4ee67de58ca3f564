//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Client input**: missing or malformed request fields (400)
/// - **Conflict**: username already registered (409)
/// - **Authentication**: bad credentials, deliberately non-specific (401)
/// - **Server/store**: anything the client cannot fix (500)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body is missing a required field or a field has the wrong shape.
    ///
    /// The String describes the offending field and is returned to the client.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Registration attempted with a username that is already stored.
    #[error("Username already exists")]
    UsernameTaken,

    /// Unknown username or wrong password. The two cases are not distinguished
    /// so the response cannot be used to enumerate usernames.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The transaction row could not be inserted (e.g. an identifier collision).
    #[error("Failed to insert transaction: {0}")]
    InsertFailed(sqlx::Error),

    /// The last stored identifier is `WB9999999`.
    #[error("Transaction identifier space exhausted")]
    IdentifierSpaceExhausted,

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] argon2::Error),

    /// A blocking task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    /// Whether this error is a unique/primary-key constraint violation in the store.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            AppError::Database(sqlx::Error::Database(db_err))
            | AppError::InsertFailed(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "ok": false,
///   "message": "Human-readable error message"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `InvalidCredentials` → 401 Unauthorized
/// - `UsernameTaken` → 409 Conflict
/// - `InsertFailed`, `IdentifierSpaceExhausted` → 500 with a specific message
/// - `Database`, `PasswordHash`, `Task` → 500 (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::UsernameTaken => (StatusCode::CONFLICT, self.to_string()),
            AppError::InsertFailed(ref err) => {
                tracing::error!(error = %err, "transaction insert failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to insert transaction".to_string(),
                )
            }
            AppError::IdentifierSpaceExhausted => {
                tracing::error!("transaction identifier space exhausted");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Database(_) | AppError::PasswordHash(_) | AppError::Task(_) => {
                tracing::error!(error = %self, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "ok": false,
            "message": message
        }));

        (status, body).into_response()
    }
}
