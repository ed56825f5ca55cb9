//! financeflow-core: domain types and the aggregation engine for FinanceFlow.
//!
//! Every engine function is pure: collections and the reference date come in
//! as arguments, fresh values go out, nothing reads the clock.

pub mod budget;
pub mod categories;
pub mod consumption;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod money;
pub mod month;
pub mod sample;
pub mod savings;
pub mod series;
pub mod summary;
pub mod time;
pub mod timeline;
pub mod transaction;
pub mod user;

pub use budget::Budget;
pub use categories::Categories;
pub use consumption::{BudgetUsage, budget_consumption, budget_usage_for};
pub use error::{AuthError, Error, Result, ValidationError};
pub use filter::{DateRange, TypeFilter, filter_by_date_range, filter_by_type_and_month};
pub use ledger::{Ledger, Upsert};
pub use money::{check_amount_limit, max_amount, parse_amount, percent_of};
pub use month::MonthKey;
pub use sample::sample_ledger;
pub use savings::SavingsGoal;
pub use series::{Period, PeriodBucket, bucket_by_period};
pub use summary::{
    SavingsProgress, Totals, breakdown_by_category, recent_transactions,
    summarize_savings_progress, summarize_totals,
};
pub use time::{parse_date, today_in};
pub use timeline::{Deadline, SavingsTimeline, savings_timeline, savings_timeline_for};
pub use transaction::{Recurrence, Transaction, TransactionKind};
pub use user::{User, UserDirectory};
