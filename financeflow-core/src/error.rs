//! Error types for the engine, the ledger and the user directory.
//!
//! Division-by-zero cases (zero budget, zero savings target) are not errors;
//! they resolve to documented fallback values in the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An id lookup found nothing in the supplied collection.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),
}

impl Error {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Malformed or missing input, rejected before any aggregation happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveAmount { field: &'static str, value: Decimal },

    #[error("{field} cannot be negative (got {value})")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("{field} cannot exceed {max}")]
    AmountTooLarge { field: &'static str, max: Decimal },

    #[error("current amount {current} cannot exceed target amount {target}")]
    CurrentExceedsTarget { current: Decimal, target: Decimal },

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("date range start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonthKey(String),

    #[error("unknown {kind} '{value}'")]
    UnknownToken { kind: &'static str, value: String },

    #[error("'{category}' is not a configured {kind} category")]
    UnknownCategory { kind: &'static str, category: String },

    #[error("report window of {0} days reaches before the earliest supported date")]
    WindowTooLarge(u32),

    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("username must be at least {min} characters")]
    UsernameTooShort { min: usize },

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("passwords do not match")]
    PasswordMismatch,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("username '{0}' already exists")]
    UsernameTaken(String),

    #[error("invalid username or password")]
    InvalidCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::not_found("budget", "b9");
        assert_eq!(err.to_string(), "budget 'b9' not found");

        let err: Error = ValidationError::MissingField("start date").into();
        assert_eq!(err.to_string(), "validation failed: start date is required");
    }
}
