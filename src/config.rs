/// Configuration for layman-catalog
///
/// Read from `~/.layman-catalog/config.toml`. Every key is optional and a
/// missing file just means defaults.

use crate::core::{AlphabeticalOrder, CommandViewState, RoleSort};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".layman-catalog";
const CONFIG_FILE: &str = "config.toml";
const CATALOG_FILE: &str = "catalog.json";

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Startup ordering for the commands listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsConfig {
    #[serde(default)]
    pub alphabetical_order: AlphabeticalOrder,
    #[serde(default)]
    pub role_sort: RoleSort,
}

/// Where the active config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// No file at this path, defaults used
    Missing(PathBuf),
    /// Home directory unknown, defaults used
    NoHome,
}

/// Settings file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog JSON file. Falls back to `~/.layman-catalog/catalog.json`.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default)]
    pub commands: CommandsConfig,
}

impl Config {
    /// Load config from `path`. A missing file gives the defaults.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (config, _) = Self::load_with_source(path).await?;
        Ok(config)
    }

    /// Like [`Config::load`], also reporting whether the file existed
    pub async fn load_with_source<P: AsRef<Path>>(path: P) -> Result<(Self, ConfigSource)> {
        let path = path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(raw) => Ok((Self::from_toml(&raw)?, ConfigSource::File(path.to_path_buf()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok((Self::default(), ConfigSource::Missing(path.to_path_buf())))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load from `path` when there is one. `None` (no home directory) gives
    /// the defaults, so an explicit catalog path still works.
    pub async fn load_or_default(path: Option<PathBuf>) -> Result<(Self, ConfigSource)> {
        match path {
            Some(path) => Self::load_with_source(path).await,
            None => Ok((Self::default(), ConfigSource::NoHome)),
        }
    }

    /// Parse config from a TOML string
    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// `~/.layman-catalog`
    pub fn app_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            CatalogError::Config("Could not determine home directory".to_string())
        })?;
        Ok(home.join(APP_DIR))
    }

    /// `~/.layman-catalog/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join(CONFIG_FILE))
    }

    /// Catalog file to load: the override if given, then `data_path`, then
    /// the default location.
    pub fn catalog_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.data_path {
            return Ok(path.clone());
        }
        Ok(Self::app_dir()?.join(CATALOG_FILE))
    }

    /// Commands view state the listing starts from
    pub fn initial_command_state(&self) -> CommandViewState {
        CommandViewState {
            alphabetical_order: self.commands.alphabetical_order,
            role_sort: self.commands.role_sort,
            ..CommandViewState::default()
        }
    }
}
