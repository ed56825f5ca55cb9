//! Terminal formatting. All rounding happens here, never in the engine.

use chrono::NaiveDate;
use financeflow_core::{BudgetUsage, Deadline, SavingsTimeline, Transaction};
use rust_decimal::Decimal;

pub fn money(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded < Decimal::ZERO {
        format!("-{symbol}{:.2}", -rounded)
    } else {
        format!("{symbol}{rounded:.2}")
    }
}

pub fn percent(p: Decimal) -> String {
    format!("{:.1}%", p.round_dp(1))
}

/// Short chart label, e.g. "Jan 5"
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn transaction_row(symbol: &str, tx: &Transaction) -> String {
    let sign = if tx.is_income() { "+" } else { "-" };
    format!(
        "{}  {:<8} {:<24} {:<18} {}{}  [{}]",
        tx.date,
        tx.kind.label(),
        truncate(&tx.title, 24),
        truncate(&tx.category, 18),
        sign,
        money(symbol, tx.amount),
        tx.id
    )
}

pub fn budget_row(symbol: &str, usage: &BudgetUsage) -> String {
    let left = if usage.is_over() {
        format!("{} over", money(symbol, usage.overage()))
    } else {
        format!("{} left", money(symbol, usage.remaining))
    };
    format!(
        "{:<18} {} / {}  {:>6}  {}  [{}]",
        truncate(&usage.category, 18),
        money(symbol, usage.spent),
        money(symbol, usage.budget_amount),
        percent(usage.percent),
        left,
        usage.budget_id
    )
}

pub fn goal_row(symbol: &str, t: &SavingsTimeline) -> String {
    let when = match t.deadline() {
        Deadline::Upcoming(days) => format!("{days} days left"),
        Deadline::DueToday => "due today".to_string(),
        Deadline::Overdue(days) => format!("overdue by {days} days"),
    };
    let pace = match t.months_to_goal {
        _ if t.is_funded() => " | funded".to_string(),
        Some(months) => format!(" | ~{months} months at current contribution"),
        None => String::new(),
    };
    format!(
        "{:<20} {:>6}  {} to go  {}{}  [{}]",
        truncate(&t.name, 20),
        percent(t.percent),
        money(symbol, t.remaining),
        when,
        pace,
        t.goal_id
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}
