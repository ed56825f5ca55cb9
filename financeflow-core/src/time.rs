//! Time utilities: resolving "today" in the user's timezone and parsing dates.
//!
//! The engine never reads the wall clock; callers resolve today here and pass it in.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::ValidationError;

/// The calendar date of `now` as seen in an IANA timezone like "America/Chicago".
pub fn today_in(tz: &str, now: DateTime<Utc>) -> Result<NaiveDate, ValidationError> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| ValidationError::InvalidTimezone(tz.to_string()))?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// Parse a `YYYY-MM-DD` date. Blank input reports `field` as missing.
pub fn parse_date(field: &'static str, input: &str) -> Result<NaiveDate, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(s.to_string()))
}
