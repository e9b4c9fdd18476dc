//! Configuration loading and dataset path resolution
//!
//! Paths are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default next to the running executable (fallback)
//!
//! A missing or unreadable config file never stops startup; it is skipped
//! and resolution falls through to the compiled default.

use crate::dataset::DEFAULT_DATASET_FILE;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the dataset file path
pub const DATASET_ENV_VAR: &str = "CHART_DATASET";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV_VAR: &str = "CHART_DATA_DIR";

/// Directory name used under the platform config directory
const CONFIG_DIR_NAME: &str = "chart-service";

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TomlConfig {
    /// Full path to the dataset file
    pub dataset_path: Option<PathBuf>,
    /// Directory holding the dataset (scraper output goes here too)
    pub data_dir: Option<PathBuf>,
}

impl TomlConfig {
    /// Parse config file contents
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Resolves where the dataset lives
#[derive(Debug, Clone)]
pub struct DatasetPathResolver {
    config_file: Option<PathBuf>,
}

impl DatasetPathResolver {
    /// Resolver using the platform config file location
    pub fn new() -> Self {
        Self {
            config_file: default_config_file(),
        }
    }

    /// Resolver reading an explicit config file instead of the platform one
    pub fn with_config_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
        }
    }

    /// Resolve the dataset file path
    ///
    /// Without an explicit file path anywhere, the dataset is
    /// [`DEFAULT_DATASET_FILE`] inside the resolved data directory.
    pub fn resolve_dataset(&self, cli_arg: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_arg {
            return path.to_path_buf();
        }

        if let Some(path) = env_path(DATASET_ENV_VAR) {
            return path;
        }

        if let Some(path) = self.toml_config().and_then(|c| c.dataset_path) {
            return path;
        }

        self.resolve_data_dir(None).join(DEFAULT_DATASET_FILE)
    }

    /// Resolve the data directory
    pub fn resolve_data_dir(&self, cli_arg: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_arg {
            return path.to_path_buf();
        }

        if let Some(path) = env_path(DATA_DIR_ENV_VAR) {
            return path;
        }

        if let Some(path) = self.toml_config().and_then(|c| c.data_dir) {
            return path;
        }

        default_data_dir()
    }

    fn toml_config(&self) -> Option<TomlConfig> {
        let path = self.config_file.as_ref()?;
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return None;
        }

        match TomlConfig::load(path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl Default for DatasetPathResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Platform config file path
///
/// On Linux the user file (~/.config/chart-service/config.toml) wins over
/// the system one (/etc/chart-service/config.toml) when both exist.
fn default_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join("config.toml"));

    if cfg!(target_os = "linux") {
        if let Some(path) = &user_config {
            if path.exists() {
                return user_config;
            }
        }
        let system_config = PathBuf::from("/etc").join(CONFIG_DIR_NAME).join("config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    user_config
}

/// `data/` beside the running executable, or `./data` if that is unknown
pub fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data")))
        .unwrap_or_else(|| PathBuf::from("data"))
}
