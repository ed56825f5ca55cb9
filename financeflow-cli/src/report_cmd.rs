//! Dashboard and date-range report views.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use financeflow_core::{DateRange, Period, parse_date};
use financeflow_report::{Dashboard, Report, default_export_name, export_csv};
use std::path::PathBuf;

use crate::app::App;
use crate::render;

pub fn run_dashboard(app: &App, period: Period) -> Result<()> {
    let session = app.session()?;
    let ledger = app.load_ledger(&session)?;
    let dash = Dashboard::build(&ledger, period, app.today, app.config.general.recent_limit);
    let sym = app.symbol();

    println!("Welcome back, {}! ({})\n", session.username, dash.today);
    println!("Total income:   {}", render::money(sym, dash.totals.total_income));
    println!("Total expenses: {}", render::money(sym, dash.totals.total_expense));
    println!("Balance:        {}", render::money(sym, dash.totals.balance));
    println!(
        "Savings:        {} of {} ({})",
        render::money(sym, dash.savings.current_sum),
        render::money(sym, dash.savings.target_sum),
        render::percent(dash.savings.progress_percent)
    );

    println!("\nIncome vs expenses ({})", dash.period);
    if dash.series.is_empty() {
        println!("  no activity");
    }
    for b in &dash.series {
        println!(
            "  {:<7} +{}  -{}  net {}",
            render::day_label(b.date),
            render::money(sym, b.income),
            render::money(sym, b.expense),
            render::money(sym, b.net())
        );
    }

    println!("\nExpenses by category");
    if dash.expense_by_category.is_empty() {
        println!("  none");
    }
    for (category, amount) in &dash.expense_by_category {
        println!("  {:<18} {}", category, render::money(sym, *amount));
    }

    println!("\nRecent transactions");
    if dash.recent.is_empty() {
        println!("  none");
    }
    for tx in &dash.recent {
        println!("  {}", render::transaction_row(sym, tx));
    }

    let over: Vec<_> = dash.over_budget().collect();
    if !over.is_empty() {
        println!();
        for u in over {
            println!(
                "! Over budget: {} by {}",
                u.category,
                render::money(sym, u.overage())
            );
        }
    }

    Ok(())
}

/// Both bounds, start through today, or the trailing `report_days` window.
fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
    report_days: u32,
) -> Result<DateRange> {
    let range = match (start, end) {
        (Some(s), Some(e)) => DateRange::parse(s, e)?,
        (Some(s), None) => DateRange::new(parse_date("start date", s)?, today)?,
        (None, Some(_)) => bail!("--end needs --start"),
        (None, None) => DateRange::trailing(today, report_days)?,
    };
    Ok(range)
}

pub fn run_report(
    app: &App,
    start: Option<String>,
    end: Option<String>,
    csv: Option<PathBuf>,
    export: bool,
) -> Result<()> {
    let session = app.session()?;
    let ledger = app.load_ledger(&session)?;

    let range = resolve_range(
        start.as_deref(),
        end.as_deref(),
        app.today,
        app.config.general.report_days,
    )?;
    let report = Report::generate(&ledger.transactions, range);
    let sym = app.symbol();

    println!("Report {} to {}\n", report.range.start(), report.range.end());
    println!("Income:   {}", render::money(sym, report.totals.total_income));
    println!("Expenses: {}", render::money(sym, report.totals.total_expense));
    println!("Balance:  {}", render::money(sym, report.totals.balance));
    println!("\n{} transactions", report.count());
    for tx in &report.transactions {
        println!("  {}", render::transaction_row(sym, tx));
    }

    let target = match (csv, export) {
        (Some(p), _) => Some(p),
        (None, true) => Some(PathBuf::from(default_export_name(app.today))),
        (None, false) => None,
    };
    if let Some(path) = target {
        let rows = export_csv(&report, &path)?;
        println!("\nExported {rows} transactions to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::logged_in_app;
    use financeflow_core::{Categories, Ledger, Transaction, TransactionKind};
    use financeflow_store::PersistenceGateway;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_range() {
        let today = date(2024, 3, 15);

        let both = resolve_range(Some("2024-01-01"), Some("2024-01-31"), today, 30).unwrap();
        assert_eq!((both.start(), both.end()), (date(2024, 1, 1), date(2024, 1, 31)));

        let open_ended = resolve_range(Some("2024-03-01"), None, today, 30).unwrap();
        assert_eq!((open_ended.start(), open_ended.end()), (date(2024, 3, 1), today));

        let trailing = resolve_range(None, None, today, 30).unwrap();
        assert_eq!((trailing.start(), trailing.end()), (date(2024, 2, 14), today));

        let err = resolve_range(None, Some("2024-01-31"), today, 30).unwrap_err();
        assert_eq!(err.to_string(), "--end needs --start");
        assert!(resolve_range(Some("2024-04-01"), None, today, 30).is_err());
        assert!(resolve_range(None, None, today, u32::MAX).is_err());
    }

    #[test]
    fn test_report_csv_export() {
        let dir = tempfile::tempdir().unwrap();
        let (app, session) = logged_in_app(dir.path());
        let mut ledger = Ledger::default();
        ledger
            .upsert_transaction(
                Transaction::new(TransactionKind::Income, "Monthly Salary", dec!(3500), "Salary", date(2024, 3, 1)),
                &Categories::default(),
            )
            .unwrap();
        app.store.save(&session.user_id, &ledger).unwrap();

        let path = dir.path().join("march.csv");
        run_report(&app, Some("2024-03-01".into()), None, Some(path.clone()), false).unwrap();
        let out = std::fs::read_to_string(&path).unwrap();
        assert!(out.contains("2024-03-01,Income,Monthly Salary,Salary,3500.00,"));

        let empty = dir.path().join("feb.csv");
        let res = run_report(&app, Some("2024-02-01".into()), Some("2024-02-29".into()), Some(empty.clone()), false);
        assert!(res.is_err());
        assert!(!empty.exists());
    }

    #[test]
    fn test_dashboard_needs_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = logged_in_app(dir.path());
        run_dashboard(&app, Period::Month).unwrap();
        app.store.end_session().unwrap();
        assert!(run_dashboard(&app, Period::Month).is_err());
    }
}
