//! Configured category lists per transaction type.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::transaction::TransactionKind;

const INCOME: &[&str] = &[
    "Salary",
    "Freelance",
    "Business",
    "Investment",
    "Gifts",
    "Other Income",
];

const EXPENSE: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Housing",
    "Personal Care",
    "Travel",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Categories {
    pub income: Vec<String>,
    pub expense: Vec<String>,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            income: INCOME.iter().map(|s| s.to_string()).collect(),
            expense: EXPENSE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Categories {
    pub fn for_kind(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    pub fn contains(&self, kind: TransactionKind, category: &str) -> bool {
        self.for_kind(kind).iter().any(|c| c == category)
    }

    pub fn check(&self, kind: TransactionKind, category: &str) -> Result<(), ValidationError> {
        if self.contains(kind, category) {
            Ok(())
        } else {
            Err(ValidationError::UnknownCategory {
                kind: kind.as_str(),
                category: category.to_string(),
            })
        }
    }
}
