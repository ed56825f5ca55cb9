//! Directory layout:
//!
//! ```text
//! <root>/users.json
//! <root>/session.json
//! <root>/data/<owner>/transactions.json
//! <root>/data/<owner>/budgets.json
//! <root>/data/<owner>/savings.json
//! ```

use anyhow::{Context, Result, bail};
use financeflow_core::{Ledger, UserDirectory};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::gateway::PersistenceGateway;
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).with_context(|| format!("create {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn users_path(&self) -> PathBuf {
        self.root.join("users.json")
    }

    fn session_path(&self) -> PathBuf {
        self.root.join("session.json")
    }

    fn owner_dir(&self, owner_id: &str) -> Result<PathBuf> {
        let safe = !owner_id.is_empty()
            && owner_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !safe {
            bail!("invalid owner id: {owner_id:?}");
        }
        Ok(self.root.join("data").join(owner_id))
    }

    pub fn load_users(&self) -> Result<UserDirectory> {
        read_json_or_default(&self.users_path())
    }

    pub fn save_users(&self, users: &UserDirectory) -> Result<()> {
        write_json(&self.users_path(), users)
    }

    pub fn current_session(&self) -> Result<Option<Session>> {
        let p = self.session_path();
        if !p.exists() {
            return Ok(None);
        }
        read_json(&p).map(Some)
    }

    pub fn start_session(&self, session: &Session) -> Result<()> {
        write_json(&self.session_path(), session)
    }

    /// Returns false when nobody was logged in.
    pub fn end_session(&self) -> Result<bool> {
        let p = self.session_path();
        if !p.exists() {
            return Ok(false);
        }
        fs::remove_file(&p).with_context(|| format!("remove {}", p.display()))?;
        Ok(true)
    }
}

impl PersistenceGateway for JsonStore {
    fn load(&self, owner_id: &str) -> Result<Ledger> {
        let dir = self.owner_dir(owner_id)?;
        let ledger = Ledger::new(
            read_json_or_default(&dir.join("transactions.json"))?,
            read_json_or_default(&dir.join("budgets.json"))?,
            read_json_or_default(&dir.join("savings.json"))?,
        );
        log::debug!(
            "loaded {owner_id}: {} transactions, {} budgets, {} savings goals",
            ledger.transactions.len(),
            ledger.budgets.len(),
            ledger.savings.len()
        );
        Ok(ledger)
    }

    fn save(&self, owner_id: &str, ledger: &Ledger) -> Result<()> {
        let dir = self.owner_dir(owner_id)?;
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        write_json(&dir.join("transactions.json"), &ledger.transactions)?;
        write_json(&dir.join("budgets.json"), &ledger.budgets)?;
        write_json(&dir.join("savings.json"), &ledger.savings)?;
        log::debug!("saved ledger for {owner_id} to {}", dir.display());
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

/// A missing file reads as the empty value; a malformed one is an error.
fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    read_json(path)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
