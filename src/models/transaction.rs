//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `TransactionId`: the `WB0000001` style identifier
//! - `Transaction`: database entity representing a kiosk transaction
//! - `CreateTransactionRequest`: the creation request body and its validation
//! - Response bodies for listing and creation

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::error::AppError;

/// Server-assigned transaction identifier: `WB` followed by exactly 7 digits.
///
/// Fixed width keeps lexicographic order equal to numeric order, which is what
/// `ORDER BY TransactionID DESC` relies on to find the latest row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(u32);

impl TransactionId {
    pub const PREFIX: &'static str = "WB";
    pub const DIGITS: usize = 7;
    pub const MAX: u32 = 9_999_999;

    /// Seed value used when the table is empty or holds an unrecognized identifier.
    pub const FIRST: TransactionId = TransactionId(1);

    /// Parse an identifier of the exact form `WB` + 7 ASCII digits.
    pub fn parse(value: &str) -> Option<Self> {
        let digits = value.strip_prefix(Self::PREFIX)?;
        if digits.len() != Self::DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(TransactionId)
    }

    /// The following identifier, or `None` once the 7-digit space is used up.
    pub fn next(self) -> Option<Self> {
        if self.0 >= Self::MAX {
            None
        } else {
            Some(TransactionId(self.0 + 1))
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:07}", Self::PREFIX, self.0)
    }
}

impl Serialize for TransactionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Field names on the wire match the column
/// names, so a listed row serializes as
/// `{"TransactionID": "WB0000001", "MobileBooth": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Stored identifier. Kept as text because rows written by other tools may
    /// not follow the `WB` format.
    #[serde(rename = "TransactionID")]
    pub id: String,

    #[serde(rename = "MobileBooth")]
    pub booth: String,

    /// Free text, empty when the client sent none
    #[serde(rename = "Location")]
    pub location: String,

    /// Payment service name as sent by the client
    #[serde(rename = "Service")]
    pub service: String,

    /// Revenue per kwacha, 3 fractional digits
    #[serde(rename = "RevenuePerKwacha", with = "rust_decimal::serde::float")]
    pub rate: Decimal,

    /// Transaction amount, 2 fractional digits
    #[serde(rename = "TransactionAmount", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for Transaction {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("TransactionID")?,
            booth: row.try_get("MobileBooth")?,
            location: row.try_get("Location")?,
            service: row.try_get("Service")?,
            rate: decimal_column(row, "RevenuePerKwacha", 3)?,
            amount: decimal_column(row, "TransactionAmount", 2)?,
        })
    }
}

/// Read a REAL column and round it to `scale` fractional digits.
fn decimal_column(row: &SqliteRow, column: &str, scale: u32) -> Result<Decimal, sqlx::Error> {
    let value: f64 = row.try_get(column)?;
    Decimal::from_f64(value)
        .map(|d| d.round_dp(scale))
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: format!("{value} is not representable as a decimal").into(),
        })
}

/// Request to record a kiosk transaction.
///
/// # JSON Example
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
/// `amount` may also be a numeric string such as `"250.50"`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTransactionRequest {
    pub booth: Option<String>,
    pub service: Option<String>,
    pub amount: Option<serde_json::Value>,
    pub location: Option<String>,
}

/// A creation request that passed validation. The rate and identifier are
/// assigned later by the transaction service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub booth: String,
    pub location: String,
    pub service: String,
    pub amount: Decimal,
}

impl CreateTransactionRequest {
    /// Trim the text fields, check required ones are present and parse the amount.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if booth or service is blank, or amount is absent
    /// - `InvalidRequest` if amount is not a number or is out of range
    pub fn validate(self) -> Result<NewTransaction, AppError> {
        let booth = trimmed(self.booth);
        let service = trimmed(self.service);
        let location = trimmed(self.location);

        let amount = match self.amount {
            Some(amount) if !booth.is_empty() && !service.is_empty() => amount,
            _ => {
                return Err(AppError::InvalidRequest(
                    "booth, service, and amount are required".to_string(),
                ));
            }
        };

        let amount = parse_amount(&amount)?;

        Ok(NewTransaction {
            booth,
            location,
            service,
            amount,
        })
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Accept a JSON number or a numeric string, rounded to 2 fractional digits.
///
/// Values too small for a `Decimal` round to `0.00`.
///
/// # Errors
///
/// - `InvalidRequest("amount must be a number")` for anything non-numeric or non-finite
/// - `InvalidRequest("amount is out of range")` for numbers beyond what a `Decimal` holds
pub fn parse_amount(value: &serde_json::Value) -> Result<Decimal, AppError> {
    let text = match value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.trim().to_string(),
        _ => return Err(not_a_number()),
    };

    if let Ok(amount) = text
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
    {
        return Ok(amount.round_dp(2));
    }

    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(not_a_number)?;

    if value.abs() < 0.005 {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_f64(value)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| AppError::InvalidRequest("amount is out of range".to_string()))
}

fn not_a_number() -> AppError {
    AppError::InvalidRequest("amount must be a number".to_string())
}

/// Response body for `GET /api/transactions`.
#[derive(Debug, Serialize)]
pub struct TransactionListResponse {
    pub ok: bool,
    pub data: Vec<Transaction>,
}

/// Response body for `POST /api/transactions`.
#[derive(Debug, Serialize)]
pub struct TransactionCreatedResponse {
    pub ok: bool,
    pub id: TransactionId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn parses_well_formed_identifiers() {
        assert_eq!(TransactionId::parse("WB0000123").map(TransactionId::number), Some(123));
        assert_eq!(TransactionId::parse("WB9999999").map(TransactionId::number), Some(9_999_999));
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for bad in ["", "WB", "WB123", "WB00000001", "XB0000001", "wb0000001", "WB00000a1", "WB+000001"] {
            assert_eq!(TransactionId::parse(bad), None, "{bad} should not parse");
        }
    }

    #[test]
    fn renders_zero_padded() {
        assert_eq!(TransactionId::FIRST.to_string(), "WB0000001");
        assert_eq!(TransactionId(123).to_string(), "WB0000123");
        assert_eq!(serde_json::to_value(TransactionId(42)).unwrap(), json!("WB0000042"));
    }

    #[test]
    fn next_stops_at_the_end_of_the_space() {
        assert_eq!(TransactionId(9_999_998).next(), Some(TransactionId(9_999_999)));
        assert_eq!(TransactionId(9_999_999).next(), None);
    }

    fn rejection_message(result: Result<Decimal, AppError>) -> String {
        match result {
            Err(AppError::InvalidRequest(msg)) => msg,
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn amount_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_amount(&json!(100)).unwrap(), Decimal::from(100));
        assert_eq!(parse_amount(&json!(12.345)).unwrap(), Decimal::from_str("12.34").unwrap());
        assert_eq!(parse_amount(&json!(" 250.50 ")).unwrap(), Decimal::from_str("250.50").unwrap());
        assert_eq!(parse_amount(&json!("1e3")).unwrap(), Decimal::from(1000));
        assert_eq!(parse_amount(&json!(1e28)).unwrap(), Decimal::from_scientific("1e28").unwrap());
    }

    #[test]
    fn amounts_below_decimal_scale_round_to_zero() {
        for tiny in [
            json!(1e-30),
            json!("1e-30"),
            json!(-1e-30),
            json!("0.0000000000000000000000000000001"),
        ] {
            assert_eq!(parse_amount(&tiny).unwrap(), Decimal::ZERO, "{tiny}");
        }
    }

    #[test]
    fn amounts_beyond_decimal_range_are_out_of_range() {
        for huge in [json!(1e30), json!("1e30"), json!(-1e30)] {
            assert_eq!(rejection_message(parse_amount(&huge)), "amount is out of range", "{huge}");
        }
    }

    #[test]
    fn amount_rejects_everything_else() {
        for bad in [
            json!("abc"),
            json!(""),
            json!("NaN"),
            json!("inf"),
            json!(true),
            json!([1]),
            json!({"v": 1}),
        ] {
            assert_eq!(rejection_message(parse_amount(&bad)), "amount must be a number", "{bad}");
        }
    }

    #[test]
    fn validate_trims_and_defaults_location() {
        let request = CreateTransactionRequest {
            booth: Some("  WB1 ".into()),
            service: Some(" Zanaco".into()),
            amount: Some(json!("10")),
            location: None,
        };

        let new_transaction = request.validate().unwrap();
        assert_eq!(new_transaction.booth, "WB1");
        assert_eq!(new_transaction.service, "Zanaco");
        assert_eq!(new_transaction.location, "");
        assert_eq!(new_transaction.amount, Decimal::from(10));
    }

    #[test]
    fn validate_reports_missing_fields_before_bad_amounts() {
        let request = CreateTransactionRequest {
            booth: Some("   ".into()),
            service: Some("FNB".into()),
            amount: Some(json!("abc")),
            location: None,
        };

        match request.validate() {
            Err(AppError::InvalidRequest(msg)) => {
                assert_eq!(msg, "booth, service, and amount are required")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
