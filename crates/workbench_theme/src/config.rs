//! Theme configuration file handling

use crate::error::{Result, ThemeError};
use crate::storage::{default_storage_path, THEME_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file name looked up in a directory
pub const CONFIG_FILE: &str = "workbench.toml";

/// Top-level configuration (workbench.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkbenchConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// `[theme]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Key the preference is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Preference file; the platform config dir when unset
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    /// OS scheme poll interval for the watcher
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_storage_key() -> String {
    THEME_STORAGE_KEY.to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            storage_path: None,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ThemeConfig {
    /// Preference file to use, explicit or platform default
    pub fn resolved_storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(default_storage_path)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

impl WorkbenchConfig {
    /// Load configuration from a directory (looks for workbench.toml)
    ///
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            tracing::debug!("No {} found, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|err| ThemeError::Config {
            path: config_path.clone(),
            message: err.to_string(),
        })?;

        Self::from_toml(&content).map_err(|err| ThemeError::Config {
            path: config_path,
            message: err.to_string(),
        })
    }

    /// Parse from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
