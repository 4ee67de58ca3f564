//! Transaction service - Core business logic for kiosk transactions.
//!
//! This service handles:
//! - Sequential identifier generation (`WB0000001`, `WB0000002`, ...)
//! - Rate assignment from the service table
//! - Inserting and listing transaction rows
//!
//! # Identifier Allocation
//!
//! Reading the latest identifier and inserting its successor happen in one
//! SQLite transaction while holding the process-wide allocation lock, so two
//! requests in this process never compute the same identifier. The primary key
//! still rejects any collision with a writer outside this process.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::{Executor, Sqlite};
use tokio::sync::Mutex;

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{NewTransaction, Transaction, TransactionId},
    services::rates,
};

/// Identifier that follows `last`, the greatest identifier currently stored.
///
/// An empty table, or a latest identifier not shaped like `WB` + 7 digits,
/// restarts the sequence at `WB0000001`.
///
/// # Errors
///
/// - `IdentifierSpaceExhausted`: `last` is `WB9999999`
pub fn next_transaction_id(last: Option<&str>) -> Result<TransactionId, AppError> {
    match last.and_then(TransactionId::parse) {
        None => Ok(TransactionId::FIRST),
        Some(id) => id.next().ok_or(AppError::IdentifierSpaceExhausted),
    }
}

/// Fetch the greatest stored identifier, if any.
pub async fn last_transaction_id<'e, E>(executor: E) -> Result<Option<String>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar("SELECT TransactionID FROM transactions ORDER BY TransactionID DESC LIMIT 1")
        .fetch_optional(executor)
        .await
}

/// Record a validated transaction and return its new identifier.
///
/// # Process
///
/// 1. Look up the rate for the service
/// 2. Take the allocation lock and start a database transaction
/// 3. Read the latest identifier and compute the next one
/// 4. Insert the row and commit (a dropped transaction rolls back)
///
/// # Errors
///
/// - `IdentifierSpaceExhausted`: no identifiers left
/// - `InsertFailed`: the insert or commit was rejected by the store
/// - `Database`: the store could not be read
pub async fn create_transaction(
    pool: &DbPool,
    id_lock: &Mutex<()>,
    new_transaction: NewTransaction,
) -> Result<TransactionId, AppError> {
    let rate = to_real(rates::service_rate(&new_transaction.service), "RevenuePerKwacha")?;
    let amount = to_real(new_transaction.amount, "TransactionAmount")?;

    let _guard = id_lock.lock().await;
    let mut tx = pool.begin().await?;

    let last = last_transaction_id(&mut *tx).await?;
    let id = next_transaction_id(last.as_deref())?;

    sqlx::query(
        r#"
        INSERT INTO transactions (
            TransactionID,
            MobileBooth,
            Location,
            Service,
            RevenuePerKwacha,
            TransactionAmount
        )
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id.to_string())
    .bind(&new_transaction.booth)
    .bind(&new_transaction.location)
    .bind(&new_transaction.service)
    .bind(rate)
    .bind(amount)
    .execute(&mut *tx)
    .await
    .map_err(AppError::InsertFailed)?;

    tx.commit().await.map_err(AppError::InsertFailed)?;

    tracing::info!(
        transaction_id = %id,
        booth = %new_transaction.booth,
        service = %new_transaction.service,
        "transaction recorded"
    );

    Ok(id)
}

/// Convert a decimal to the REAL value bound for `column`.
fn to_real(value: Decimal, column: &str) -> Result<f64, AppError> {
    value.to_f64().ok_or_else(|| {
        AppError::InsertFailed(sqlx::Error::Encode(
            format!("{value} cannot be stored in {column}").into(),
        ))
    })
}

/// All stored transactions in store order.
pub async fn list_transactions(pool: &DbPool) -> Result<Vec<Transaction>, AppError> {
    let transactions = sqlx::query_as::<_, Transaction>(
        r#"
        SELECT TransactionID, MobileBooth, Location, Service, RevenuePerKwacha, TransactionAmount
        FROM transactions
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(transactions)
}
