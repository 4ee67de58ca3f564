//! Health check endpoint for service monitoring.

use crate::{AppState, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "database": "connected",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// If the database file cannot be queried, returns the standard 500 error body.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}
