use anyhow::{Context, Result};
use financeflow_core::Categories;
use financeflow_report::{DEFAULT_RECENT_LIMIT, DEFAULT_REPORT_DAYS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralSection,
    #[serde(default)]
    pub categories: Categories,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSection {
    /// IANA timezone used to decide what "today" is
    pub timezone: String,
    /// Rows in the dashboard's recent-transactions list
    pub recent_limit: usize,
    pub currency_symbol: String,
    /// Default report window when no dates are given
    pub report_days: u32,
    /// Give brand-new accounts the sample ledger
    pub seed_sample_data: bool,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            timezone: "America/Chicago".to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            currency_symbol: "$".to_string(),
            report_days: DEFAULT_REPORT_DAYS,
            seed_sample_data: true,
        }
    }
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join("config.toml")
}

pub fn load_config(home: &Path) -> Result<Config> {
    let p = config_path(home);
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(home: &Path, cfg: &Config) -> Result<()> {
    let p = config_path(home);
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config(home: &Path) -> Result<()> {
    let p = config_path(home);
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(home, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
