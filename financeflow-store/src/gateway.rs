use anyhow::Result;
use chrono::NaiveDate;
use financeflow_core::{Ledger, sample_ledger};

/// Load and save one owner's collections.
///
/// Failures (unreadable files, full disk) come back as errors; they are
/// never swallowed into an empty ledger.
pub trait PersistenceGateway {
    fn load(&self, owner_id: &str) -> Result<Ledger>;

    fn save(&self, owner_id: &str, ledger: &Ledger) -> Result<()>;

    /// Load, seeding and persisting the sample ledger when the owner has no data yet.
    fn load_or_seed(&self, owner_id: &str, today: NaiveDate) -> Result<Ledger> {
        let ledger = self.load(owner_id)?;
        if !ledger.is_empty() {
            return Ok(ledger);
        }
        log::warn!("no data for {owner_id}; seeding sample ledger");
        let seeded = sample_ledger(today);
        self.save(owner_id, &seeded)?;
        Ok(seeded)
    }
}
