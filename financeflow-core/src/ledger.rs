//! One user's collections, held by the caller and edited through validated
//! upserts and removals.

use serde::{Deserialize, Serialize};

use crate::budget::Budget;
use crate::categories::Categories;
use crate::error::{Error, Result};
use crate::savings::SavingsGoal;
use crate::transaction::Transaction;

/// Outcome of an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

impl Upsert {
    pub fn verb(&self) -> &'static str {
        match self {
            Upsert::Inserted => "added",
            Upsert::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub savings: Vec<SavingsGoal>,
}

impl Ledger {
    pub fn new(
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
        savings: Vec<SavingsGoal>,
    ) -> Self {
        Self {
            transactions,
            budgets,
            savings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty() && self.savings.is_empty()
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budget(&self, id: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn savings_goal(&self, id: &str) -> Option<&SavingsGoal> {
        self.savings.iter().find(|s| s.id == id)
    }

    /// Validate and insert, or replace the entry with the same id in place.
    pub fn upsert_transaction(&mut self, tx: Transaction, categories: &Categories) -> Result<Upsert> {
        tx.validate()?;
        categories.check(tx.kind, &tx.category)?;
        Ok(upsert_by_id(&mut self.transactions, tx, |t| &t.id))
    }

    pub fn upsert_budget(&mut self, budget: Budget) -> Result<Upsert> {
        budget.validate()?;
        Ok(upsert_by_id(&mut self.budgets, budget, |b| &b.id))
    }

    pub fn upsert_savings(&mut self, goal: SavingsGoal) -> Result<Upsert> {
        goal.validate()?;
        Ok(upsert_by_id(&mut self.savings, goal, |s| &s.id))
    }

    pub fn remove_transaction(&mut self, id: &str) -> Result<Transaction> {
        remove_by_id(&mut self.transactions, id, |t| &t.id)
            .ok_or_else(|| Error::not_found("transaction", id))
    }

    pub fn remove_budget(&mut self, id: &str) -> Result<Budget> {
        remove_by_id(&mut self.budgets, id, |b| &b.id).ok_or_else(|| Error::not_found("budget", id))
    }

    pub fn remove_savings(&mut self, id: &str) -> Result<SavingsGoal> {
        remove_by_id(&mut self.savings, id, |s| &s.id)
            .ok_or_else(|| Error::not_found("savings goal", id))
    }
}

fn upsert_by_id<T>(items: &mut Vec<T>, item: T, id: impl Fn(&T) -> &String) -> Upsert {
    match items.iter().position(|existing| id(existing) == id(&item)) {
        Some(i) => {
            items[i] = item;
            Upsert::Updated
        }
        None => {
            items.push(item);
            Upsert::Inserted
        }
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, id: &str, key: impl Fn(&T) -> &String) -> Option<T> {
    let i = items.iter().position(|item| key(item) == id)?;
    Some(items.remove(i))
}
