//! Dashboard summaries: totals, savings progress, category breakdown and
//! the recent-transactions list.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::money::percent_of;
use crate::savings::SavingsGoal;
use crate::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `total_income - total_expense`
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsProgress {
    pub target_sum: Decimal,
    pub current_sum: Decimal,
    /// Zero when `target_sum` is zero, `Decimal::MAX` if unrepresentable
    pub progress_percent: Decimal,
}

/// Sum income and expense amounts. Nothing is rounded here.
pub fn summarize_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => totals.total_income += tx.amount,
            TransactionKind::Expense => totals.total_expense += tx.amount,
        }
    }
    totals.balance = totals.total_income - totals.total_expense;
    totals
}

pub fn summarize_savings_progress(goals: &[SavingsGoal]) -> SavingsProgress {
    let target_sum: Decimal = goals.iter().map(|g| g.target_amount).sum();
    let current_sum: Decimal = goals.iter().map(|g| g.current_amount).sum();
    SavingsProgress {
        target_sum,
        current_sum,
        progress_percent: percent_of(current_sum, target_sum).unwrap_or(Decimal::MAX),
    }
}

/// Sum amounts per category for one transaction kind.
/// Categories without a matching transaction are absent, never zero-valued.
pub fn breakdown_by_category(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> BTreeMap<String, Decimal> {
    let mut out: BTreeMap<String, Decimal> = BTreeMap::new();
    for tx in transactions.iter().filter(|t| t.kind == kind) {
        *out.entry(tx.category.clone()).or_default() += tx.amount;
    }
    out
}

/// Newest first, at most `n`. The sort is stable, so same-date entries keep
/// their input order.
pub fn recent_transactions(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}
