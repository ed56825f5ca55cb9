//! Monthly category budgets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::check_amount_limit;
use crate::month::MonthKey;

pub const DEFAULT_BUDGET_COLOR: &str = "#4361ee";

/// A monthly spending cap for one expense category.
///
/// One budget per (category, month) is expected from producers but not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: String,
    /// The monthly cap
    pub amount: Decimal,
    pub month: MonthKey,
    /// Opaque display color
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_BUDGET_COLOR.to_string()
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: Decimal, month: MonthKey) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category: category.into(),
            amount,
            month,
            color: default_color(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount {
                field: "amount",
                value: self.amount,
            });
        }
        check_amount_limit("amount", self.amount)?;
        Ok(())
    }
}
