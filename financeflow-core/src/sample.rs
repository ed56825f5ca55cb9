//! Starter ledger for a brand-new user, dated relative to `today`.

use chrono::{Duration, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::budget::Budget;
use crate::ledger::Ledger;
use crate::month::MonthKey;
use crate::savings::SavingsGoal;
use crate::transaction::{Recurrence, Transaction, TransactionKind};

pub fn sample_ledger(today: NaiveDate) -> Ledger {
    let days_ago = |n: i64| today - Duration::days(n);

    let transactions = vec![
        Transaction::new(TransactionKind::Income, "Monthly Salary", Decimal::new(3500, 0), "Salary", today)
            .with_id("1")
            .with_recurrence(Recurrence::Monthly)
            .with_description("Monthly salary from work"),
        Transaction::new(TransactionKind::Income, "Freelance Project", Decimal::new(800, 0), "Freelance", days_ago(2))
            .with_id("2")
            .with_description("Website development project"),
        Transaction::new(TransactionKind::Expense, "Grocery Shopping", Decimal::new(12050, 2), "Food & Dining", today)
            .with_id("3")
            .with_recurrence(Recurrence::Weekly)
            .with_description("Weekly groceries"),
        Transaction::new(TransactionKind::Expense, "Electricity Bill", Decimal::new(8530, 2), "Bills & Utilities", days_ago(5))
            .with_id("4")
            .with_recurrence(Recurrence::Monthly)
            .with_description("Monthly electricity bill"),
        Transaction::new(TransactionKind::Expense, "Gas Refill", Decimal::new(45, 0), "Transportation", days_ago(1))
            .with_id("5")
            .with_description("Car fuel"),
    ];

    let month = MonthKey::from_date(today);
    let budgets = vec![
        Budget::new("Food & Dining", Decimal::new(500, 0), month).with_id("b1").with_color("#06d6a0"),
        Budget::new("Transportation", Decimal::new(200, 0), month).with_id("b2").with_color("#4361ee"),
        Budget::new("Entertainment", Decimal::new(150, 0), month).with_id("b3").with_color("#ffd166"),
        Budget::new("Bills & Utilities", Decimal::new(300, 0), month).with_id("b4").with_color("#ef476f"),
    ];

    let six_months_out = today
        .checked_add_months(Months::new(6))
        .unwrap_or(today + Duration::days(182));
    let savings = vec![
        SavingsGoal::new("Emergency Fund", Decimal::new(5000, 0), Decimal::new(2300, 0), six_months_out)
            .with_id("s1")
            .with_monthly_contribution(Decimal::new(300, 0)),
        SavingsGoal::new("New Laptop", Decimal::new(1200, 0), Decimal::new(800, 0), today + Duration::days(90))
            .with_id("s2")
            .with_monthly_contribution(Decimal::new(100, 0)),
    ];

    Ledger::new(transactions, budgets, savings)
}
