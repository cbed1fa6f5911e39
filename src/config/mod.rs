use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::services::ChartPeriod;
use crate::errors::{LedgerError, Result};
use crate::utils::write_atomic;

const DEFAULT_DIR_NAME: &str = "hustlehub";
const CONFIG_FILE: &str = "config.json";
const DATA_DIR: &str = "data";

/// Environment variable overriding the application base directory.
pub const HOME_ENV: &str = "HUSTLEHUB_HOME";

/// Stores user preferences for the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory holding persisted values. Defaults to `<base>/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Seed the demo transactions when nothing has been saved yet.
    #[serde(default = "Config::default_seed_sample_data")]
    pub seed_sample_data: bool,
    /// Cosmetic pause the presentation layer may show before assistant replies.
    #[serde(default = "Config::default_assistant_delay_ms")]
    pub assistant_delay_ms: u64,
    #[serde(default)]
    pub default_chart_period: ChartPeriod,
    #[serde(default = "Config::default_trend_weeks")]
    pub trend_weeks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed_sample_data: Self::default_seed_sample_data(),
            assistant_delay_ms: Self::default_assistant_delay_ms(),
            default_chart_period: ChartPeriod::default(),
            trend_weeks: Self::default_trend_weeks(),
        }
    }
}

impl Config {
    pub fn default_seed_sample_data() -> bool {
        true
    }

    pub fn default_assistant_delay_ms() -> u64 {
        800
    }

    pub fn default_trend_weeks() -> usize {
        4
    }

    /// Resolves where values are stored, relative to `base` unless configured explicitly.
    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| base.join(DATA_DIR))
    }
}

/// Returns the application base directory: `$HUSTLEHUB_HOME`, else the platform data dir.
pub fn base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| LedgerError::Config(err.to_string()))
        } else {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| LedgerError::Config(err.to_string()))?;
        write_atomic(&self.config_path, &json)?;
        debug!(path = %self.config_path.display(), "config saved");
        Ok(())
    }
}
