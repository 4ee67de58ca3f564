//! Operator account HTTP handlers.
//!
//! - POST /api/register - Create an operator account
//! - POST /api/login - Check operator credentials

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    AppState,
    error::AppError,
    handlers::body_or_default,
    models::{OkResponse, user::Credentials},
    services::user_service,
};

/// Register a new operator.
///
/// # Endpoint
///
/// `POST /api/register`
///
/// # Request Body
///
/// ```json
/// { "username": "operator1", "password": "s3cret" }
/// ```
///
/// # Response
///
/// - **200**: `{"ok": true}`
/// - **400**: username or password missing
/// - **409**: username already exists
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<OkResponse>, AppError> {
    let (username, password) = body_or_default(payload)?.validate_registration()?;

    user_service::register_user(&state.pool, &username, password).await?;

    Ok(Json(OkResponse::success()))
}

/// Verify operator credentials.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Response
///
/// - **200**: `{"ok": true}`
/// - **401**: `{"ok": false, "message": "Invalid username or password"}` for any failure
///
/// No session or token is issued.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<OkResponse>, AppError> {
    let (username, password) = body_or_default(payload)?.into_parts();

    if let Err(err) = user_service::authenticate(&state.pool, &username, password).await {
        if matches!(err, AppError::InvalidCredentials) {
            tracing::warn!(%username, "login rejected");
        }
        return Err(err);
    }

    Ok(Json(OkResponse::success()))
}
