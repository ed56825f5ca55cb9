//! Income/expense series for the dashboard chart.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::transaction::{Transaction, TransactionKind};

/// Chart window selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    All,
    Week,
    Month,
    Year,
}

impl Period {
    /// First date (inclusive) the window keeps, or `None` for no lower bound.
    ///
    /// - week: `today - 7 days`
    /// - month: first day of today's month
    /// - year: January 1 of today's year
    pub fn start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::All => None,
            Period::Week => Some(today - Duration::days(7)),
            Period::Month => Some(today - Duration::days(i64::from(today.day0()))),
            Period::Year => Some(today - Duration::days(i64::from(today.ordinal0()))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Period::All),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            _ => Err(ValidationError::UnknownToken {
                kind: "period",
                value: s.to_string(),
            }),
        }
    }
}

/// Income and expense summed for one calendar day.
///
/// The key stays a date; labels are a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBucket {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

impl PeriodBucket {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        }
    }

    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Keep transactions inside `period` (relative to `today`) and group them by day.
///
/// Buckets come out in first-occurrence order of each date in the input;
/// sort by `date` for a chronological chart.
pub fn bucket_by_period(
    transactions: &[Transaction],
    period: Period,
    today: NaiveDate,
) -> Vec<PeriodBucket> {
    let since = period.start(today);
    let mut buckets: Vec<PeriodBucket> = Vec::new();
    let mut slots: HashMap<NaiveDate, usize> = HashMap::new();

    for tx in transactions
        .iter()
        .filter(|t| since.is_none_or(|start| t.date >= start))
    {
        let slot = *slots.entry(tx.date).or_insert_with(|| {
            buckets.push(PeriodBucket::empty(tx.date));
            buckets.len() - 1
        });
        let bucket = &mut buckets[slot];
        match tx.kind {
            TransactionKind::Income => bucket.income += tx.amount,
            TransactionKind::Expense => bucket.expense += tx.amount,
        }
    }

    log::debug!(
        "bucketed {} transactions into {} days for period {}",
        transactions.len(),
        buckets.len(),
        period
    );
    buckets
}
