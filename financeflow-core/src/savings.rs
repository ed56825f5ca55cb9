//! Savings goals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::check_amount_limit;

/// A savings target. Progress only changes through explicit edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    /// Advisory; never applied automatically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_contribution: Option<Decimal>,
}

impl SavingsGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: Decimal,
        current_amount: Decimal,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
            monthly_contribution: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_monthly_contribution(mut self, amount: Decimal) -> Self {
        self.monthly_contribution = Some(amount);
        self
    }

    /// Creation-time checks: 0 <= current <= target, target > 0.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount {
                field: "target amount",
                value: self.target_amount,
            });
        }
        check_amount_limit("target amount", self.target_amount)?;
        if self.current_amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount {
                field: "current amount",
                value: self.current_amount,
            });
        }
        if self.current_amount > self.target_amount {
            return Err(ValidationError::CurrentExceedsTarget {
                current: self.current_amount,
                target: self.target_amount,
            });
        }
        if let Some(contribution) = self.monthly_contribution {
            if contribution < Decimal::ZERO {
                return Err(ValidationError::NegativeAmount {
                    field: "monthly contribution",
                    value: contribution,
                });
            }
            check_amount_limit("monthly contribution", contribution)?;
        }
        Ok(())
    }
}
