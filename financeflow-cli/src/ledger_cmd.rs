//! Transaction, budget and savings-goal commands.

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use financeflow_core::{
    Budget, MonthKey, Recurrence, SavingsGoal, Transaction, TransactionKind, TypeFilter,
    budget_consumption, budget_usage_for, filter_by_type_and_month, parse_amount, parse_date,
    savings_timeline,
};

use crate::app::App;
use crate::render;

#[derive(Subcommand, Debug)]
pub enum TxCommand {
    /// Record an income or expense
    Add {
        /// income | expense
        #[arg(long = "type")]
        kind: TransactionKind,
        #[arg(long)]
        title: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        category: String,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// none | daily | weekly | monthly | yearly
        #[arg(long, default_value = "none")]
        recurring: Recurrence,
        #[arg(long)]
        description: Option<String>,
    },

    /// Change fields of an existing transaction
    Edit {
        id: String,
        #[arg(long = "type")]
        kind: Option<TransactionKind>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        recurring: Option<Recurrence>,
        #[arg(long)]
        description: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// all | income | expense
        #[arg(long = "type", default_value = "all")]
        kind: TypeFilter,
        /// YYYY-MM
        #[arg(long)]
        month: Option<MonthKey>,
    },

    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum BudgetCommand {
    /// Create or update a budget for the current month
    Set {
        #[arg(long)]
        category: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        color: Option<String>,
        /// Update this budget instead of creating a new one
        #[arg(long)]
        id: Option<String>,
    },

    /// Spending against each budget (default: current month)
    List {
        #[arg(long)]
        month: Option<MonthKey>,
    },

    /// Consumption for a single budget
    Show { id: String },

    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum SavingsCommand {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        target: String,
        #[arg(long, default_value = "0")]
        current: String,
        /// YYYY-MM-DD
        #[arg(long)]
        target_date: String,
        #[arg(long)]
        monthly: Option<String>,
    },

    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        current: Option<String>,
        #[arg(long)]
        target_date: Option<String>,
        #[arg(long)]
        monthly: Option<String>,
    },

    List,

    Delete { id: String },
}

pub fn run_tx(app: &App, cmd: TxCommand) -> Result<()> {
    let session = app.session()?;
    let mut ledger = app.load_ledger(&session)?;

    match cmd {
        TxCommand::Add {
            kind,
            title,
            amount,
            category,
            date,
            recurring,
            description,
        } => {
            let date = match date {
                Some(d) => parse_date("date", &d)?,
                None => app.today,
            };
            let mut tx = Transaction::new(kind, title.trim(), parse_amount(&amount)?, category, date)
                .with_recurrence(recurring);
            if let Some(d) = description {
                tx = tx.with_description(d);
            }
            let id = tx.id.clone();
            let outcome = ledger.upsert_transaction(tx, &app.config.categories)?;
            app.save_ledger(&session, &ledger)?;
            println!("Transaction {} successfully! [{id}]", outcome.verb());
        }

        TxCommand::Edit {
            id,
            kind,
            title,
            amount,
            category,
            date,
            recurring,
            description,
        } => {
            let mut tx = ledger
                .transaction(&id)
                .cloned()
                .with_context(|| format!("transaction {id} not found"))?;
            if let Some(k) = kind {
                tx.kind = k;
            }
            if let Some(t) = title {
                tx.title = t.trim().to_string();
            }
            if let Some(a) = amount {
                tx.amount = parse_amount(&a)?;
            }
            if let Some(c) = category {
                tx.category = c;
            }
            if let Some(d) = date {
                tx.date = parse_date("date", &d)?;
            }
            if let Some(r) = recurring {
                tx.recurrence = r;
            }
            if let Some(d) = description {
                tx = tx.with_description(d);
            }
            let outcome = ledger.upsert_transaction(tx, &app.config.categories)?;
            app.save_ledger(&session, &ledger)?;
            println!("Transaction {} successfully!", outcome.verb());
        }

        TxCommand::List { kind, month } => {
            let mut rows = filter_by_type_and_month(&ledger.transactions, kind, month);
            rows.sort_by(|a, b| b.date.cmp(&a.date));
            if rows.is_empty() {
                println!("No transactions found");
                return Ok(());
            }
            for tx in &rows {
                println!("{}", render::transaction_row(app.symbol(), tx));
            }
            println!("\n{} transactions", rows.len());
        }

        TxCommand::Delete { id } => {
            let removed = ledger.remove_transaction(&id)?;
            app.save_ledger(&session, &ledger)?;
            println!("Transaction deleted successfully! ({})", removed.title);
        }
    }

    Ok(())
}

pub fn run_budget(app: &App, cmd: BudgetCommand) -> Result<()> {
    let session = app.session()?;
    let mut ledger = app.load_ledger(&session)?;
    let current_month = MonthKey::from_date(app.today);

    match cmd {
        BudgetCommand::Set {
            category,
            amount,
            color,
            id,
        } => {
            if !app.config.categories.contains(TransactionKind::Expense, &category) {
                bail!("'{category}' is not a configured expense category");
            }
            let mut budget = Budget::new(category, parse_amount(&amount)?, current_month);
            if let Some(id) = id {
                let existing = ledger
                    .budget(&id)
                    .with_context(|| format!("budget {id} not found"))?;
                budget = budget.with_id(id).with_color(existing.color.clone());
            }
            if let Some(c) = color {
                budget = budget.with_color(c);
            }
            let outcome = ledger.upsert_budget(budget)?;
            app.save_ledger(&session, &ledger)?;
            println!("Budget {} successfully!", outcome.verb());
        }

        BudgetCommand::List { month } => {
            let month = month.unwrap_or(current_month);
            let usage = budget_consumption(&ledger.transactions, &ledger.budgets, month);
            if usage.is_empty() {
                println!("No budgets set for {month}");
                return Ok(());
            }
            println!("Budgets for {month}\n");
            for u in &usage {
                println!("{}", render::budget_row(app.symbol(), u));
            }
        }

        BudgetCommand::Show { id } => {
            let usage = budget_usage_for(&ledger.transactions, &ledger.budgets, &id)?;
            println!("{} ({})", usage.category, usage.month);
            println!("{}", render::budget_row(app.symbol(), &usage));
        }

        BudgetCommand::Delete { id } => {
            ledger.remove_budget(&id)?;
            app.save_ledger(&session, &ledger)?;
            println!("Budget deleted successfully!");
        }
    }

    Ok(())
}

pub fn run_savings(app: &App, cmd: SavingsCommand) -> Result<()> {
    let session = app.session()?;
    let mut ledger = app.load_ledger(&session)?;

    match cmd {
        SavingsCommand::Add {
            name,
            target,
            current,
            target_date,
            monthly,
        } => {
            let mut goal = SavingsGoal::new(
                name.trim(),
                parse_amount(&target)?,
                parse_amount(&current)?,
                parse_date("target date", &target_date)?,
            );
            if let Some(m) = monthly {
                goal = goal.with_monthly_contribution(parse_amount(&m)?);
            }
            let outcome = ledger.upsert_savings(goal)?;
            app.save_ledger(&session, &ledger)?;
            println!("Savings goal {} successfully!", outcome.verb());
        }

        SavingsCommand::Edit {
            id,
            name,
            target,
            current,
            target_date,
            monthly,
        } => {
            let mut goal = ledger
                .savings_goal(&id)
                .cloned()
                .with_context(|| format!("savings goal {id} not found"))?;
            if let Some(n) = name {
                goal.name = n.trim().to_string();
            }
            if let Some(t) = target {
                goal.target_amount = parse_amount(&t)?;
            }
            if let Some(c) = current {
                goal.current_amount = parse_amount(&c)?;
            }
            if let Some(d) = target_date {
                goal.target_date = parse_date("target date", &d)?;
            }
            if let Some(m) = monthly {
                goal.monthly_contribution = Some(parse_amount(&m)?);
            }
            let outcome = ledger.upsert_savings(goal)?;
            app.save_ledger(&session, &ledger)?;
            println!("Savings goal {} successfully!", outcome.verb());
        }

        SavingsCommand::List => {
            if ledger.savings.is_empty() {
                println!("No savings goals yet");
                return Ok(());
            }
            for goal in &ledger.savings {
                let timeline = savings_timeline(goal, app.today);
                println!("{}", render::goal_row(app.symbol(), &timeline));
            }
        }

        SavingsCommand::Delete { id } => {
            ledger.remove_savings(&id)?;
            app.save_ledger(&session, &ledger)?;
            println!("Savings goal deleted successfully!");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::logged_in_app;
    use chrono::NaiveDate;
    use financeflow_core::{Categories, Ledger};
    use financeflow_store::{PersistenceGateway, Session};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seed(app: &App, session: &Session) {
        let mut ledger = Ledger::default();
        ledger
            .upsert_transaction(
                Transaction::new(TransactionKind::Expense, "Grocery Shopping", dec!(120.50), "Food & Dining", date(2024, 3, 1))
                    .with_id("t1")
                    .with_description("Weekly groceries"),
                &Categories::default(),
            )
            .unwrap();
        ledger
            .upsert_budget(
                Budget::new("Food & Dining", dec!(500), MonthKey::new(2024, 1).unwrap())
                    .with_id("b1")
                    .with_color("#ff0000"),
            )
            .unwrap();
        ledger
            .upsert_savings(SavingsGoal::new("New Laptop", dec!(1200), dec!(800), date(2024, 6, 1)).with_id("s1"))
            .unwrap();
        app.store.save(&session.user_id, &ledger).unwrap();
    }

    fn stored(app: &App, session: &Session) -> Ledger {
        app.store.load(&session.user_id).unwrap()
    }

    #[test]
    fn test_tx_add_defaults_to_today() {
        let dir = tempfile::tempdir().unwrap();
        let (app, session) = logged_in_app(dir.path());
        run_tx(
            &app,
            TxCommand::Add {
                kind: TransactionKind::Income,
                title: " Bonus ".into(),
                amount: "$1,000".into(),
                category: "Salary".into(),
                date: None,
                recurring: Recurrence::None,
                description: None,
            },
        )
        .unwrap();

        let ledger = stored(&app, &session);
        assert_eq!(ledger.transactions.len(), 1);
        let tx = &ledger.transactions[0];
        assert_eq!(tx.title, "Bonus");
        assert_eq!(tx.amount, dec!(1000));
        assert_eq!(tx.date, date(2024, 3, 15));
    }

    #[test]
    fn test_tx_edit_only_touches_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let (app, session) = logged_in_app(dir.path());
        seed(&app, &session);

        run_tx(
            &app,
            TxCommand::Edit {
                id: "t1".into(),
                kind: None,
                title: Some(" Groceries ".into()),
                amount: Some("99.99".into()),
                category: None,
                date: None,
                recurring: None,
                description: None,
            },
        )
        .unwrap();

        let ledger = stored(&app, &session);
        let tx = ledger.transaction("t1").unwrap();
        assert_eq!(tx.title, "Groceries");
        assert_eq!(tx.amount, dec!(99.99));
        assert_eq!(tx.category, "Food & Dining");
        assert_eq!(tx.date, date(2024, 3, 1));
        assert_eq!(tx.description.as_deref(), Some("Weekly groceries"));
        assert_eq!(ledger.transactions.len(), 1);
    }

    #[test]
    fn test_tx_edit_rejects_category_of_other_kind() {
        let dir = tempfile::tempdir().unwrap();
        let (app, session) = logged_in_app(dir.path());
        seed(&app, &session);

        let edit = TxCommand::Edit {
            id: "t1".into(),
            kind: Some(TransactionKind::Income),
            title: None,
            amount: None,
            category: None,
            date: None,
            recurring: None,
            description: None,
        };
        assert!(run_tx(&app, edit).is_err());
        assert_eq!(stored(&app, &session).transaction("t1").unwrap().kind, TransactionKind::Expense);

        assert!(run_tx(&app, TxCommand::Delete { id: "missing".into() }).is_err());
    }

    #[test]
    fn test_budget_set_stamps_current_month_on_update() {
        let dir = tempfile::tempdir().unwrap();
        let (app, session) = logged_in_app(dir.path());
        seed(&app, &session);

        run_budget(
            &app,
            BudgetCommand::Set {
                category: "Food & Dining".into(),
                amount: "600".into(),
                color: None,
                id: Some("b1".into()),
            },
        )
        .unwrap();

        let ledger = stored(&app, &session);
        assert_eq!(ledger.budgets.len(), 1);
        let budget = ledger.budget("b1").unwrap();
        assert_eq!(budget.month, MonthKey::new(2024, 3).unwrap());
        assert_eq!(budget.amount, dec!(600));
        assert_eq!(budget.color, "#ff0000");
    }

    #[test]
    fn test_budget_set_new_and_unknown_category() {
        let dir = tempfile::tempdir().unwrap();
        let (app, session) = logged_in_app(dir.path());

        run_budget(
            &app,
            BudgetCommand::Set {
                category: "Travel".into(),
                amount: "250".into(),
                color: Some("#00ff00".into()),
                id: None,
            },
        )
        .unwrap();
        let err = run_budget(
            &app,
            BudgetCommand::Set {
                category: "Salary".into(),
                amount: "250".into(),
                color: None,
                id: None,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a configured expense category"));

        let ledger = stored(&app, &session);
        assert_eq!(ledger.budgets.len(), 1);
        assert_eq!(ledger.budgets[0].month, MonthKey::new(2024, 3).unwrap());
        assert_eq!(ledger.budgets[0].color, "#00ff00");
    }

    #[test]
    fn test_savings_edit_merges_and_revalidates() {
        let dir = tempfile::tempdir().unwrap();
        let (app, session) = logged_in_app(dir.path());
        seed(&app, &session);

        let edit = |current: &str| SavingsCommand::Edit {
            id: "s1".into(),
            name: None,
            target: None,
            current: Some(current.into()),
            target_date: None,
            monthly: Some("50".into()),
        };
        run_savings(&app, edit("1000")).unwrap();
        let goal = stored(&app, &session).savings_goal("s1").unwrap().clone();
        assert_eq!(goal.current_amount, dec!(1000));
        assert_eq!(goal.target_amount, dec!(1200));
        assert_eq!(goal.monthly_contribution, Some(dec!(50)));
        assert_eq!(goal.name, "New Laptop");

        assert!(run_savings(&app, edit("1500")).is_err());
        assert_eq!(stored(&app, &session).savings_goal("s1").unwrap().current_amount, dec!(1000));

        run_savings(&app, SavingsCommand::Delete { id: "s1".into() }).unwrap();
        assert!(stored(&app, &session).savings.is_empty());
    }
}
