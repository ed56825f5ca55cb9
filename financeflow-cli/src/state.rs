use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$FINANCEFLOW_HOME`, else `~/.financeflow`
pub fn financeflow_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FINANCEFLOW_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".financeflow"))
}

pub fn ensure_financeflow_home() -> Result<PathBuf> {
    let dir = financeflow_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
