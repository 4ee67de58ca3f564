//! Revenue-per-kwacha rates for the supported payment services.

use rust_decimal::Decimal;

/// Rate applied to any service not in the table, in thousandths.
const DEFAULT_RATE_THOUSANDTHS: i64 = 50;

/// Look up the revenue-per-kwacha rate for a payment service.
///
/// Matching is exact and case-sensitive; unknown names get the default rate of `0.050`.
pub fn service_rate(service: &str) -> Decimal {
    let thousandths = match service {
        "Airtel Money" => 50,
        "MTN Money" => 60,
        "Zamtel Money" => 45,
        "Zanaco" => 50,
        "FNB" => 50,
        _ => DEFAULT_RATE_THOUSANDTHS,
    };
    Decimal::new(thousandths, 3)
}
