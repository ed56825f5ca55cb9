//! Decimal helpers shared by the aggregation functions.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;

/// Parse a user-entered amount such as `120.50` or `$1,200`.
/// Non-numeric input is rejected rather than coerced to zero.
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Err(ValidationError::MissingField("amount"));
    }
    Decimal::from_str(&cleaned).map_err(|_| ValidationError::InvalidAmount(input.to_string()))
}

/// Largest amount a record may carry. Keeps every sum the engine takes
/// well inside `Decimal`'s range.
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000, 0)
}

pub fn check_amount_limit(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    let max = max_amount();
    if value > max {
        return Err(ValidationError::AmountTooLarge { field, max });
    }
    Ok(())
}

/// `100 * part / whole`, zero when `whole` is zero, or `None` when the
/// result does not fit in a `Decimal` (e.g. a vanishingly small `whole`).
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole.is_zero() {
        return Some(Decimal::ZERO);
    }
    match part.checked_mul(Decimal::ONE_HUNDRED) {
        Some(scaled) => scaled.checked_div(whole),
        None => part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED),
    }
}
