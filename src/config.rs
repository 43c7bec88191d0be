//! Configuration management for logkeep

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::{Destination, DEFAULT_FOLDER_NAME, DEFAULT_MAX_LOGS};

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory the log folder is created in (default: current working directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Name of the log folder inside `directory` (default: "Debugg")
    #[serde(default = "default_folder_name")]
    pub folder_name: String,

    /// Maximum number of log files kept in the log folder (default: 30)
    #[serde(default = "default_max_logs")]
    pub max_logs: usize,
}

fn default_folder_name() -> String {
    DEFAULT_FOLDER_NAME.to_string()
}

fn default_max_logs() -> usize {
    DEFAULT_MAX_LOGS
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: None,
            folder_name: default_folder_name(),
            max_logs: default_max_logs(),
        }
    }
}

impl LogConfig {
    /// Load configuration from the default config file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Destination described by this configuration
    pub fn destination(&self) -> Destination {
        Destination::new(self.directory.clone(), Some(self.folder_name.clone()))
    }
}

/// Get the base configuration directory (~/.logkeep)
/// Falls back to ./.logkeep if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".logkeep")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".logkeep"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
