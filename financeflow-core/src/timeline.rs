//! Savings goal timelines and contribution projections.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::money::percent_of;
use crate::savings::SavingsGoal;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsTimeline {
    pub goal_id: String,
    pub name: String,
    /// Not clamped; zero when the target is zero, `Decimal::MAX` if unrepresentable
    pub percent: Decimal,
    pub remaining: Decimal,
    /// Whole days until the target date; zero or negative once it is reached
    pub days_left: i64,
    /// Months of the advisory contribution needed to close the gap
    pub months_to_goal: Option<u32>,
}

/// Where a goal stands relative to its target date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    Upcoming(i64),
    DueToday,
    /// Days since the target date passed
    Overdue(i64),
}

impl SavingsTimeline {
    pub fn deadline(&self) -> Deadline {
        match self.days_left {
            d if d > 0 => Deadline::Upcoming(d),
            0 => Deadline::DueToday,
            d => Deadline::Overdue(-d),
        }
    }

    pub fn is_funded(&self) -> bool {
        self.remaining <= Decimal::ZERO
    }
}

/// Dates carry no time of day, so the day difference is already the ceiling.
pub fn savings_timeline(goal: &SavingsGoal, today: NaiveDate) -> SavingsTimeline {
    let remaining = goal.target_amount - goal.current_amount;
    SavingsTimeline {
        goal_id: goal.id.clone(),
        name: goal.name.clone(),
        percent: percent_of(goal.current_amount, goal.target_amount).unwrap_or(Decimal::MAX),
        remaining,
        days_left: (goal.target_date - today).num_days(),
        months_to_goal: months_to_goal(remaining, goal.monthly_contribution),
    }
}

pub fn savings_timeline_for(
    goals: &[SavingsGoal],
    goal_id: &str,
    today: NaiveDate,
) -> Result<SavingsTimeline> {
    goals
        .iter()
        .find(|g| g.id == goal_id)
        .map(|g| savings_timeline(g, today))
        .ok_or_else(|| Error::not_found("savings goal", goal_id))
}

fn months_to_goal(remaining: Decimal, contribution: Option<Decimal>) -> Option<u32> {
    if remaining <= Decimal::ZERO {
        return Some(0);
    }
    let contribution = contribution.filter(|c| *c > Decimal::ZERO)?;
    remaining.checked_div(contribution)?.ceil().to_u32()
}
