//! CSV export of a report, one row per transaction.
//!
//! Columns: Date, Type, Title, Category, Amount, Description

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::report::Report;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Description")]
    description: &'a str,
}

/// File name for an export made on `today`
pub fn default_export_name(today: NaiveDate) -> String {
    format!("FinanceFlow_Report_{}.csv", today.format("%Y-%m-%d"))
}

/// Write the report as CSV, returning the number of data rows.
/// An empty report is refused.
pub fn write_csv<W: io::Write>(report: &Report, writer: W) -> Result<usize> {
    if report.is_empty() {
        bail!(
            "no data to export for {} to {}",
            report.range.start(),
            report.range.end()
        );
    }

    let mut wtr = csv::Writer::from_writer(writer);
    for tx in &report.transactions {
        wtr.serialize(ExportRow {
            date: tx.date,
            kind: tx.kind.label(),
            title: &tx.title,
            category: &tx.category,
            amount: format!("{:.2}", tx.amount),
            description: tx.description.as_deref().unwrap_or(""),
        })
        .with_context(|| format!("writing row for transaction {}", tx.id))?;
    }
    wtr.flush().context("flushing csv output")?;
    Ok(report.count())
}

pub fn export_csv(report: &Report, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    if report.is_empty() {
        bail!(
            "no data to export for {} to {}; {} not written",
            report.range.start(),
            report.range.end(),
            path.display()
        );
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let rows = write_csv(report, file).with_context(|| format!("export {}", path.display()))?;
    log::info!("exported {rows} transactions to {}", path.display());
    Ok(rows)
}
