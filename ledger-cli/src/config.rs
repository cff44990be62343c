use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use ledger_ingest::DEFAULT_COUNT;
use ledger_insights::DEFAULT_HORIZON_DAYS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub generator: GeneratorSection,
    pub forecast: ForecastSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Records per synthetic batch
    pub count: usize,
    /// Fixed seed for reproducible batches; omit for fresh data each run
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSection {
    pub horizon_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorSection {
                count: DEFAULT_COUNT,
                seed: None,
            },
            forecast: ForecastSection {
                horizon_days: DEFAULT_HORIZON_DAYS,
            },
        }
    }
}

pub fn ledger_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".ledger"))
}

pub fn ensure_ledger_home() -> Result<PathBuf> {
    let dir = ledger_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ledger_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn init_config() -> Result<()> {
    ensure_ledger_home()?;
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let s = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    println!("Wrote {}", p.display());
    Ok(())
}
