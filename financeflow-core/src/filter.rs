//! Report filters over a transaction collection.
//!
//! Both filters are plain predicates, so they compose in either order.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};
use crate::month::MonthKey;
use crate::time::parse_date;
use crate::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionKind::Income,
            TypeFilter::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeFilter::All => "all",
            TypeFilter::Income => "income",
            TypeFilter::Expense => "expense",
        })
    }
}

impl FromStr for TypeFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            _ => Err(ValidationError::UnknownToken {
                kind: "type filter",
                value: s.to_string(),
            }),
        }
    }
}

/// Inclusive calendar-date range. A transaction dated on `end` is inside,
/// which matches treating `end` as 23:59:59.999 of that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> std::result::Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM-DD` bounds as entered in a report form.
    pub fn parse(start: &str, end: &str) -> std::result::Result<Self, ValidationError> {
        let start = parse_date("start date", start)?;
        let end = parse_date("end date", end)?;
        Self::new(start, end)
    }

    /// The `days` days leading up to and including `end`.
    pub fn trailing(end: NaiveDate, days: u32) -> std::result::Result<Self, ValidationError> {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or(ValidationError::WindowTooLarge(days))?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.contains(t.date))
            .cloned()
            .collect()
    }
}

/// Keep transactions dated within `[start, end]`. A missing bound is a
/// validation error, never "everything" or "nothing".
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<Transaction>> {
    let start = start.ok_or(ValidationError::MissingField("start date"))?;
    let end = end.ok_or(ValidationError::MissingField("end date"))?;
    Ok(DateRange::new(start, end)?.filter(transactions))
}

/// Keep transactions of the given type and, when `month` is set, that month.
pub fn filter_by_type_and_month(
    transactions: &[Transaction],
    filter: TypeFilter,
    month: Option<MonthKey>,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.matches(t.kind))
        .filter(|t| month.is_none_or(|m| t.month() == m))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::error::Error;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(id: &str, kind: TransactionKind, date: NaiveDate) -> Transaction {
        Transaction::new(kind, "t", dec!(10), "Other", date).with_id(id)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("1", TransactionKind::Income, date(2024, 1, 1)),
            tx("2", TransactionKind::Expense, date(2024, 1, 31)),
            tx("3", TransactionKind::Expense, date(2024, 2, 1)),
            tx("4", TransactionKind::Income, date(2023, 12, 30)),
        ]
    }

    fn ids(txns: &[Transaction]) -> Vec<&str> {
        txns.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_range_includes_end_day() {
        let txns = sample();
        let out = filter_by_date_range(&txns, Some(date(2024, 1, 1)), Some(date(2024, 1, 31))).unwrap();
        assert_eq!(ids(&out), vec!["1", "2"]);
    }

    #[test]
    fn test_missing_bounds_are_errors() {
        let txns = sample();
        assert_eq!(
            filter_by_date_range(&txns, None, Some(date(2024, 1, 31))),
            Err(Error::Validation(ValidationError::MissingField("start date")))
        );
        assert_eq!(
            filter_by_date_range(&txns, Some(date(2024, 1, 1)), None),
            Err(Error::Validation(ValidationError::MissingField("end date")))
        );
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(matches!(
            DateRange::new(date(2024, 2, 1), date(2024, 1, 1)),
            Err(ValidationError::InvalidDateRange { .. })
        ));
        assert!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_parse_range() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        assert_eq!(range.start(), date(2024, 1, 1));
        assert_eq!(
            DateRange::parse("", "2024-01-31"),
            Err(ValidationError::MissingField("start date"))
        );
        assert!(matches!(
            DateRange::parse("2024-01-01", "31/01/2024"),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_trailing_window() {
        let range = DateRange::trailing(date(2024, 3, 1), 30).unwrap();
        assert_eq!(range.start(), date(2024, 1, 31));
        assert!(range.contains(date(2024, 3, 1)));
    }

    #[test]
    fn test_trailing_window_past_calendar_start() {
        assert_eq!(
            DateRange::trailing(date(2024, 3, 1), u32::MAX),
            Err(ValidationError::WindowTooLarge(u32::MAX))
        );
    }

    #[test]
    fn test_type_and_month() {
        let txns = sample();
        let jan = MonthKey::new(2024, 1).unwrap();
        assert_eq!(ids(&filter_by_type_and_month(&txns, TypeFilter::All, None)), vec!["1", "2", "3", "4"]);
        assert_eq!(ids(&filter_by_type_and_month(&txns, TypeFilter::Expense, None)), vec!["2", "3"]);
        assert_eq!(ids(&filter_by_type_and_month(&txns, TypeFilter::All, Some(jan))), vec!["1", "2"]);
        assert_eq!(ids(&filter_by_type_and_month(&txns, TypeFilter::Income, Some(jan))), vec!["1"]);
    }

    #[test]
    fn test_filters_compose_in_either_order() {
        let txns = sample();
        let range = DateRange::new(date(2024, 1, 1), date(2024, 2, 1)).unwrap();
        let a = filter_by_type_and_month(&range.filter(&txns), TypeFilter::Expense, None);
        let b = range.filter(&filter_by_type_and_month(&txns, TypeFilter::Expense, None));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_end_inclusive_next_day_excluded(offset in 0i64..3650, span in 0i64..400) {
            let start = date(2015, 1, 1) + Duration::days(offset);
            let end = start + Duration::days(span);
            let txns = vec![
                tx("on-end", TransactionKind::Expense, end),
                tx("after-end", TransactionKind::Expense, end + Duration::days(1)),
            ];
            let out = filter_by_date_range(&txns, Some(start), Some(end)).unwrap();
            prop_assert_eq!(ids(&out), vec!["on-end"]);
        }
    }
}
