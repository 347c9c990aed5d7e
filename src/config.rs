//! Configuration loading and data-file resolution
//!
//! Settings come from `taski.toml` in the taski data directory (or the file
//! named by `TASKI_CONFIG`). Everything has a default, so no config file is
//! needed for normal use.
//!
//! ```toml
//! file = "/home/me/todo/data.json"
//!
//! [trash]
//! retention_days = 30
//! ```

use std::path::{Path, PathBuf};

use chrono::Duration;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Name of the config file inside the data directory
pub const CONFIG_FILE: &str = "taski.toml";

/// Name of the default data file inside the data directory
pub const DATA_FILE: &str = "data.json";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Task data file; defaults to `<data-dir>/data.json`
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Trash retention settings
    #[serde(default)]
    pub trash: TrashConfig,
}

/// Retention window for soft-deleted tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashConfig {
    /// Days a deleted task survives before the startup purge drops it
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
}

fn default_retention_days() -> u32 {
    30
}

impl Default for TrashConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Resolution order for the config path: `TASKI_CONFIG`, then
    /// `<data-dir>/taski.toml`. A missing file yields defaults; a file
    /// that fails to parse is an error, not silently ignored.
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os("TASKI_CONFIG") {
            Some(path) => PathBuf::from(path),
            None => data_dir().join(CONFIG_FILE),
        };
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                return Err(Error::InvalidConfig("file must not be empty".to_string()));
            }
        }
        Ok(())
    }

    /// Resolve the data file: `--file` flag beats config, config beats the
    /// default location.
    pub fn resolve_data_file(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Some(path) = &self.file {
            return path.clone();
        }
        data_dir().join(DATA_FILE)
    }

    /// Retention window as a duration.
    pub fn retention(&self) -> Duration {
        Duration::days(i64::from(self.trash.retention_days))
    }
}

/// Platform data directory for taski, falling back to the current directory
/// when the platform offers none.
pub fn data_dir() -> PathBuf {
    match ProjectDirs::from("", "", "taski") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => {
            warn!("no platform data directory; using current directory");
            PathBuf::from(".")
        }
    }
}
