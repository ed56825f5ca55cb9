use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use financeflow_core::Period;
use financeflow_store::{PersistenceGateway, Session};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod app;
mod config;
mod ledger_cmd;
mod render;
mod report_cmd;
mod state;

use app::App;
use ledger_cmd::{BudgetCommand, SavingsCommand, TxCommand};

#[derive(Parser, Debug)]
#[command(name = "financeflow", version, about = "Personal finance tracker")]
struct Cli {
    /// Debug-level logging on stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and log in
    Register {
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },

    Login {
        username: String,
        #[arg(long)]
        password: String,
    },

    Logout,

    /// Show the logged-in user
    Whoami,

    /// Totals, chart series, category breakdown and recent activity
    Dashboard {
        /// all | week | month | year
        #[arg(long, default_value = "month")]
        period: Period,
    },

    /// Income and expense transactions
    Tx {
        #[command(subcommand)]
        command: TxCommand,
    },

    /// Monthly category budgets
    Budget {
        #[command(subcommand)]
        command: BudgetCommand,
    },

    /// Savings goals
    Savings {
        #[command(subcommand)]
        command: SavingsCommand,
    },

    /// Transactions and totals for a date range (default: trailing window from config)
    Report {
        /// YYYY-MM-DD
        #[arg(long)]
        start: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        end: Option<String>,
        /// Write the report as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write the report as CSV using the default file name
        #[arg(long)]
        export: bool,
    },

    /// Manage ~/.financeflow/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = match cli.command {
        Command::Config { command } => return run_config(command),
        other => other,
    };

    let app = App::open()?;

    match command {
        Command::Register {
            username,
            password,
            confirm,
        } => {
            let mut users = app.store.load_users()?;
            let user = users.register(&username, &password, &confirm, app.now)?.clone();
            app.store.save_users(&users)?;
            start_session(&app, &Session::for_user(&user, app.now))?;
            println!("Account created. Logged in as {}", user.username);
        }

        Command::Login { username, password } => {
            let users = app.store.load_users()?;
            let user = users.authenticate(&username, &password)?;
            start_session(&app, &Session::for_user(user, app.now))?;
            println!("Logged in as {}", user.username);
        }

        Command::Logout => {
            if app.store.end_session()? {
                println!("Logged out");
            } else {
                println!("Not logged in");
            }
        }

        Command::Whoami => match app.store.current_session()? {
            Some(s) => println!("{} (since {})", s.username, s.started_at.format("%Y-%m-%d %H:%M UTC")),
            None => println!("Not logged in"),
        },

        Command::Dashboard { period } => report_cmd::run_dashboard(&app, period)?,

        Command::Tx { command } => ledger_cmd::run_tx(&app, command)?,

        Command::Budget { command } => ledger_cmd::run_budget(&app, command)?,

        Command::Savings { command } => ledger_cmd::run_savings(&app, command)?,

        Command::Report {
            start,
            end,
            csv,
            export,
        } => report_cmd::run_report(&app, start, end, csv, export)?,

        Command::Config { command } => run_config(command)?,
    }

    Ok(())
}

fn run_config(command: ConfigCommand) -> Result<()> {
    let home = state::ensure_financeflow_home()?;
    match command {
        ConfigCommand::Init => config::init_config(&home),
        ConfigCommand::Show => {
            let cfg = config::load_config(&home)?;
            print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            Ok(())
        }
    }
}

/// Persist the session and make sure the user has a ledger to look at.
fn start_session(app: &App, session: &Session) -> Result<()> {
    app.store.start_session(session)?;
    if app.config.general.seed_sample_data {
        app.store.load_or_seed(&session.user_id, app.today)?;
    }
    tracing::info!(user = %session.username, "session started");
    Ok(())
}
