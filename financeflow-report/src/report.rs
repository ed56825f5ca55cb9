//! Date-range reports: the filtered transactions plus their totals.

use financeflow_core::{DateRange, Totals, Transaction, summarize_totals};
use serde::Serialize;

/// Default report window, in days back from today
pub const DEFAULT_REPORT_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub range: DateRange,
    /// Newest first; same-date entries keep ledger order
    pub transactions: Vec<Transaction>,
    pub totals: Totals,
}

impl Report {
    pub fn generate(transactions: &[Transaction], range: DateRange) -> Self {
        let mut selected = range.filter(transactions);
        selected.sort_by(|a, b| b.date.cmp(&a.date));
        let totals = summarize_totals(&selected);

        log::debug!(
            "report {}..{}: {} of {} transactions",
            range.start(),
            range.end(),
            selected.len(),
            transactions.len()
        );

        Self {
            range,
            transactions: selected,
            totals,
        }
    }

    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use financeflow_core::TransactionKind;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_sorts_newest_first() {
        let txns = vec![
            Transaction::new(TransactionKind::Expense, "a", dec!(10), "Other", date(2024, 1, 2)).with_id("a"),
            Transaction::new(TransactionKind::Income, "b", dec!(100), "Salary", date(2024, 1, 20)).with_id("b"),
            Transaction::new(TransactionKind::Expense, "c", dec!(5), "Other", date(2024, 2, 2)).with_id("c"),
            Transaction::new(TransactionKind::Expense, "d", dec!(1), "Other", date(2024, 1, 2)).with_id("d"),
        ];
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let report = Report::generate(&txns, range);

        let ids: Vec<_> = report.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "d"]);
        assert_eq!(report.count(), 3);
        assert_eq!(report.totals.total_income, dec!(100));
        assert_eq!(report.totals.total_expense, dec!(11));
        assert_eq!(report.totals.balance, dec!(89));
    }

    #[test]
    fn test_empty_report() {
        let range = DateRange::trailing(date(2024, 1, 31), DEFAULT_REPORT_DAYS).unwrap();
        let report = Report::generate(&[], range);
        assert!(report.is_empty());
        assert_eq!(report.totals, Totals::default());
    }
}
