//! Transaction HTTP handlers.
//!
//! - GET /api/transactions - List every recorded transaction
//! - POST /api/transactions - Record a transaction with a server-assigned ID

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    AppState,
    error::AppError,
    handlers::body_or_default,
    models::transaction::{
        CreateTransactionRequest, TransactionCreatedResponse, TransactionListResponse,
    },
    services::transaction_service,
};

/// List all transactions.
///
/// # Response (200)
///
/// ```json
/// {
///   "ok": true,
///   "data": [
///     {
///       "TransactionID": "WB0000001",
///       "MobileBooth": "WB1",
///       "Location": "Lusaka",
///       "Service": "MTN Money",
///       "RevenuePerKwacha": 0.06,
///       "TransactionAmount": 250.5
///     }
///   ]
/// }
/// ```
///
/// Rows come back in store order; there is no paging or filtering.
pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<TransactionListResponse>, AppError> {
    let data = transaction_service::list_transactions(&state.pool).await?;

    Ok(Json(TransactionListResponse { ok: true, data }))
}

/// Record a transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "booth": "WB1",
///   "service": "MTN Money",
///   "amount": 250.5,
///   "location": "Lusaka"
/// }
/// ```
///
/// # Response
///
/// - **200**: `{"ok": true, "id": "WB0000001"}`
/// - **400**: booth, service or amount missing, or amount not numeric
/// - **500**: the row could not be inserted
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<Json<TransactionCreatedResponse>, AppError> {
    let new_transaction = body_or_default(payload)?.validate()?;

    let id =
        transaction_service::create_transaction(&state.pool, &state.id_lock, new_transaction)
            .await?;

    Ok(Json(TransactionCreatedResponse { ok: true, id }))
}
