//! Budget consumption: how much of each monthly cap has been spent.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::budget::Budget;
use crate::error::{Error, Result};
use crate::money::percent_of;
use crate::month::MonthKey;
use crate::transaction::Transaction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub budget_id: String,
    pub category: String,
    pub month: MonthKey,
    pub budget_amount: Decimal,
    pub spent: Decimal,
    /// Negative when the budget is overspent
    pub remaining: Decimal,
    /// `min(100, 100 * spent / budget_amount)`; zero for a zero budget
    pub percent: Decimal,
    pub color: String,
}

impl BudgetUsage {
    pub fn is_over(&self) -> bool {
        self.remaining < Decimal::ZERO
    }

    /// How far spending went past the cap, zero when within budget
    pub fn overage(&self) -> Decimal {
        if self.is_over() {
            -self.remaining
        } else {
            Decimal::ZERO
        }
    }
}

/// Consumption for every budget stamped with `month`, in budget order.
pub fn budget_consumption(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: MonthKey,
) -> Vec<BudgetUsage> {
    let spent = expenses_by_category(transactions, month);
    budgets
        .iter()
        .filter(|b| b.month == month)
        .map(|b| usage(b, &spent))
        .collect()
}

/// Recompute a single budget, for its own month.
pub fn budget_usage_for(
    transactions: &[Transaction],
    budgets: &[Budget],
    budget_id: &str,
) -> Result<BudgetUsage> {
    let budget = budgets
        .iter()
        .find(|b| b.id == budget_id)
        .ok_or_else(|| Error::not_found("budget", budget_id))?;
    let spent = expenses_by_category(transactions, budget.month);
    Ok(usage(budget, &spent))
}

fn expenses_by_category(transactions: &[Transaction], month: MonthKey) -> HashMap<&str, Decimal> {
    let mut out: HashMap<&str, Decimal> = HashMap::new();
    for tx in transactions
        .iter()
        .filter(|t| t.is_expense() && month.contains(t.date))
    {
        *out.entry(tx.category.as_str()).or_default() += tx.amount;
    }
    out
}

fn usage(budget: &Budget, spent_by_category: &HashMap<&str, Decimal>) -> BudgetUsage {
    let spent = spent_by_category
        .get(budget.category.as_str())
        .copied()
        .unwrap_or(Decimal::ZERO);

    if budget.amount.is_zero() {
        log::warn!("budget {} has a zero amount; reporting 0%", budget.id);
    }
    // An unrepresentable ratio only happens far past the cap.
    let percent = percent_of(spent, budget.amount)
        .map_or(Decimal::ONE_HUNDRED, |p| p.min(Decimal::ONE_HUNDRED));

    BudgetUsage {
        budget_id: budget.id.clone(),
        category: budget.category.clone(),
        month: budget.month,
        budget_amount: budget.amount,
        spent,
        remaining: budget.amount - spent,
        percent,
        color: budget.color.clone(),
    }
}
