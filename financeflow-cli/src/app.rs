use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use financeflow_core::{Ledger, today_in};
use financeflow_store::{JsonStore, PersistenceGateway, Session};

use crate::config::{Config, load_config};
use crate::state::ensure_financeflow_home;

/// Everything a command needs: storage, configuration and the resolved clock.
pub struct App {
    pub store: JsonStore,
    pub config: Config,
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

impl App {
    pub fn open() -> Result<Self> {
        let home = ensure_financeflow_home()?;
        let config = load_config(&home)?;
        let store = JsonStore::open(&home)?;
        Self::new(store, config, Utc::now())
    }

    /// Resolve today's date for `now` in the configured timezone.
    pub fn new(store: JsonStore, config: Config, now: DateTime<Utc>) -> Result<Self> {
        let today = today_in(&config.general.timezone, now)
            .context("resolve today from [general].timezone")?;
        tracing::debug!(root = %store.root().display(), %today, "opened store");
        Ok(Self {
            store,
            config,
            now,
            today,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.config.general.currency_symbol
    }

    pub fn session(&self) -> Result<Session> {
        self.store
            .current_session()?
            .context("not logged in (run: financeflow login <username> --password <password>)")
    }

    pub fn load_ledger(&self, session: &Session) -> Result<Ledger> {
        if self.config.general.seed_sample_data {
            self.store.load_or_seed(&session.user_id, self.today)
        } else {
            self.store.load(&session.user_id)
        }
    }

    pub fn save_ledger(&self, session: &Session, ledger: &Ledger) -> Result<()> {
        self.store
            .save(&session.user_id, ledger)
            .with_context(|| format!("saving data for {}", session.username))
    }
}

/// An `App` over a throwaway store with one logged-in user, on 2024-03-15.
#[cfg(test)]
pub(crate) fn logged_in_app(root: &std::path::Path) -> (App, Session) {
    use chrono::TimeZone;
    use financeflow_core::UserDirectory;

    let store = JsonStore::open(root).unwrap();
    let mut config = Config::default();
    config.general.seed_sample_data = false;
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let app = App::new(store, config, now).unwrap();

    let mut users = UserDirectory::default();
    let user = users.register("alice", "secret1", "secret1", now).unwrap().clone();
    app.store.save_users(&users).unwrap();
    let session = Session::for_user(&user, now);
    app.store.start_session(&session).unwrap();
    (app, session)
}
