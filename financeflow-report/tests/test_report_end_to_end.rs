use chrono::NaiveDate;
use financeflow_core::{
    Budget, Categories, DateRange, Ledger, MonthKey, Period, Transaction, TransactionKind,
    budget_consumption, filter_by_date_range, summarize_totals,
};
use financeflow_report::{Dashboard, Report, export_csv};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn january_ledger() -> Ledger {
    let cats = Categories::default();
    let mut ledger = Ledger::default();
    for tx in [
        Transaction::new(TransactionKind::Income, "Monthly Salary", dec!(3500), "Salary", date(2024, 1, 1)).with_id("1"),
        Transaction::new(TransactionKind::Expense, "Grocery Shopping", dec!(120.50), "Food & Dining", date(2024, 1, 1)).with_id("2"),
        Transaction::new(TransactionKind::Expense, "Gas Refill", dec!(45), "Transportation", date(2023, 12, 30)).with_id("3"),
    ] {
        ledger.upsert_transaction(tx, &cats).unwrap();
    }
    ledger
        .upsert_budget(Budget::new("Food & Dining", dec!(500), MonthKey::new(2024, 1).unwrap()).with_id("b1"))
        .unwrap();
    ledger
}

/// Totals over the whole ledger match the hand-computed figures.
#[test]
fn test_totals_across_year_boundary() {
    let ledger = january_ledger();
    let totals = summarize_totals(&ledger.transactions);
    assert_eq!(totals.total_income, dec!(3500));
    assert_eq!(totals.total_expense, dec!(165.50));
    assert_eq!(totals.balance, dec!(3334.50));
}

/// The January budget only sees the January grocery run.
#[test]
fn test_budget_consumption_for_january() {
    let ledger = january_ledger();
    let usage = budget_consumption(&ledger.transactions, &ledger.budgets, MonthKey::new(2024, 1).unwrap());
    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].spent, dec!(120.50));
    assert_eq!(usage[0].remaining, dec!(379.50));
    assert_eq!(usage[0].percent.round_dp(1), dec!(24.1));
}

/// Dashboard for "this month" drops the December expense from the chart but
/// not from the headline totals.
#[test]
fn test_dashboard_month_window() {
    let ledger = january_ledger();
    let dash = Dashboard::build(&ledger, Period::Month, date(2024, 1, 20), 5);
    assert_eq!(dash.series.len(), 1);
    assert_eq!(dash.series[0].income, dec!(3500));
    assert_eq!(dash.series[0].expense, dec!(120.50));
    assert_eq!(dash.totals.total_expense, dec!(165.50));
    assert_eq!(dash.recent.last().unwrap().id, "3");
}

/// Report + export round trip through a real file.
#[test]
fn test_report_export_to_file() {
    let ledger = january_ledger();
    let range = DateRange::parse("2023-12-30", "2024-01-01").unwrap();
    let report = Report::generate(&ledger.transactions, range);
    assert_eq!(report.count(), 3);
    assert_eq!(
        report.transactions,
        {
            let mut v = filter_by_date_range(&ledger.transactions, Some(range.start()), Some(range.end())).unwrap();
            v.sort_by(|a, b| b.date.cmp(&a.date));
            v
        }
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");
    assert_eq!(export_csv(&report, &path).unwrap(), 3);

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[2][0], "2023-12-30");
    assert_eq!(&rows[2][4], "45.00");
}

/// Narrowing the range to a day with nothing on it yields nothing to export.
#[test]
fn test_export_refuses_empty_range() {
    let ledger = january_ledger();
    let report = Report::generate(&ledger.transactions, DateRange::parse("2024-01-02", "2024-01-31").unwrap());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let err = export_csv(&report, &path).unwrap_err();
    assert!(err.to_string().contains("no data to export"));
    assert!(!path.exists());
}
