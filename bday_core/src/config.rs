//! Configuration file support for bday.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bday/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub remind: RemindConfig,
}

/// Data source configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// The birthday file. There is no default; the CLI requires either this
    /// setting or its --file flag.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Reminder defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemindConfig {
    #[serde(default = "default_days_ahead")]
    pub days_ahead: i64,

    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Period selector code (subset of "ymwdh"); empty means the standard
    /// period set.
    #[serde(default)]
    pub periods: String,
}

impl Default for RemindConfig {
    fn default() -> Self {
        Self {
            days_ahead: default_days_ahead(),
            max_results: default_max_results(),
            periods: String::new(),
        }
    }
}

fn default_days_ahead() -> i64 {
    21
}

fn default_max_results() -> usize {
    100
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("no config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_default();
            PathBuf::from(home).join(".config")
        });
        base.join("bday").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::debug!("saved config to {:?}", path);
        Ok(())
    }
}
