//! Everything the dashboard, budgets and savings views show, computed in one pass
//! from an explicit ledger and reference date.

use chrono::NaiveDate;
use financeflow_core::{
    BudgetUsage, Ledger, MonthKey, Period, PeriodBucket, SavingsProgress, SavingsTimeline,
    Totals, Transaction, TransactionKind, breakdown_by_category, bucket_by_period,
    budget_consumption, recent_transactions, savings_timeline, summarize_savings_progress,
    summarize_totals,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub today: NaiveDate,
    pub period: Period,
    pub totals: Totals,
    pub savings: SavingsProgress,
    /// Chronological, one entry per day with activity
    pub series: Vec<PeriodBucket>,
    pub expense_by_category: BTreeMap<String, Decimal>,
    pub recent: Vec<Transaction>,
    /// Budgets stamped with today's month
    pub budgets: Vec<BudgetUsage>,
    pub goals: Vec<SavingsTimeline>,
}

impl Dashboard {
    pub fn build(ledger: &Ledger, period: Period, today: NaiveDate, recent_limit: usize) -> Self {
        let mut series = bucket_by_period(&ledger.transactions, period, today);
        series.sort_by_key(|b| b.date);

        Self {
            today,
            period,
            totals: summarize_totals(&ledger.transactions),
            savings: summarize_savings_progress(&ledger.savings),
            series,
            expense_by_category: breakdown_by_category(&ledger.transactions, TransactionKind::Expense),
            recent: recent_transactions(&ledger.transactions, recent_limit),
            budgets: budget_consumption(
                &ledger.transactions,
                &ledger.budgets,
                MonthKey::from_date(today),
            ),
            goals: ledger
                .savings
                .iter()
                .map(|g| savings_timeline(g, today))
                .collect(),
        }
    }

    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetUsage> {
        self.budgets.iter().filter(|b| b.is_over())
    }
}
