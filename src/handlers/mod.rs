//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body)
//! 2. Delegates validation and storage to models and services
//! 3. Returns a JSON response or an `AppError`

use axum::{Json, extract::rejection::JsonRejection};

use crate::error::AppError;

/// Health check endpoint
pub mod health;
/// Transaction listing and creation endpoints
pub mod transactions;
/// Registration and login endpoints
pub mod users;

/// Unwrap a JSON body, treating an absent or unparseable body as an empty object.
///
/// A body that parses as JSON but has a field of the wrong type is still a client
/// error and is reported as such.
pub(crate) fn body_or_default<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::JsonDataError(err)) => {
            Err(AppError::InvalidRequest(err.body_text()))
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "request body ignored");
            Ok(T::default())
        }
    }
}
