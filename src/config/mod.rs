use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::ConfigError,
    session::clock::DEFAULT_DATE_FORMAT,
    utils::{persistence::write_atomic_blocking, DEFAULT_LOG_FILTER},
};

const DEFAULT_DIR_NAME: &str = "expense_tracker";
const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
const CONFIG_FILE: &str = "config.json";

/// User-adjustable settings for a tracker session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the entry store. Defaults to [`app_data_dir`].
    pub data_dir: Option<PathBuf>,
    #[serde(default = "TrackerConfig::default_store_file")]
    pub store_file: String,
    #[serde(default = "TrackerConfig::default_date_format")]
    pub date_format: String,
    #[serde(default = "TrackerConfig::default_log_filter")]
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            store_file: Self::default_store_file(),
            date_format: Self::default_date_format(),
            log_filter: Self::default_log_filter(),
        }
    }
}

impl TrackerConfig {
    pub fn default_store_file() -> String {
        "entries.json".into()
    }

    pub fn default_date_format() -> String {
        DEFAULT_DATE_FORMAT.into()
    }

    pub fn default_log_filter() -> String {
        DEFAULT_LOG_FILTER.into()
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(app_data_dir)
            .join(&self.store_file)
    }
}

/// Returns the application data directory, `EXPENSE_TRACKER_HOME` when set.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves [`TrackerConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::new(base.join(CONFIG_FILE))
    }

    pub fn from_env() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TrackerConfig, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(TrackerConfig::default())
        }
    }

    pub fn save(&self, config: &TrackerConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic_blocking(&self.path, &json)?;
        Ok(())
    }
}
