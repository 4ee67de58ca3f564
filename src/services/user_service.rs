//! Operator accounts: registration and credential checks.

use crate::{
    db::DbPool,
    error::AppError,
    models::user::User,
    services::password,
};

/// Register a new operator.
///
/// # Process
///
/// 1. Reject if the username is already stored
/// 2. Derive a salted hash of the password
/// 3. Insert the row
///
/// A concurrent registration of the same name that slips between steps 1 and 3
/// hits the primary key and is reported the same way as step 1.
///
/// # Errors
///
/// - `UsernameTaken`: the username exists
/// - `Database` / `PasswordHash` / `Task`: internal failures
pub async fn register_user(pool: &DbPool, username: &str, password: String) -> Result<(), AppError> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Err(AppError::UsernameTaken);
    }

    let password_hash = password::hash(password).await?;

    sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(username)
        .bind(&password_hash)
        .execute(pool)
        .await
        .map_err(|err| match AppError::from(err) {
            err if err.is_unique_violation() => AppError::UsernameTaken,
            err => err,
        })?;

    tracing::info!(%username, "user registered");
    Ok(())
}

/// Check a username/password pair.
///
/// Unknown users and wrong passwords both yield `InvalidCredentials`.
pub async fn authenticate(pool: &DbPool, username: &str, password: String) -> Result<(), AppError> {
    if username.is_empty() || password.is_empty() {
        return Err(AppError::InvalidCredentials);
    }

    let user = sqlx::query_as::<_, User>(
        "SELECT username, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::InvalidCredentials)?;

    if password::matches(password, user.password_hash).await? {
        Ok(())
    } else {
        Err(AppError::InvalidCredentials)
    }
}
