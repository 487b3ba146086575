//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --db ./shop.db   --key shop-state:v1                               │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SHOPFRONT_DB_PATH=/tmp/shop.db                                     │
//! │     SHOPFRONT_STORAGE_KEY=shop-state:v1                                │
//! │     SHOPFRONT_CATALOG=./catalog.json                                   │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/shopfront/shopfront.toml (Linux)                         │
//! │     ~/Library/Application Support/com.shopfront.shopfront/ (macOS)     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     platform data dir, built-in catalog, key "shop-state:v1"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shopfront.toml
//! db_path = "/var/lib/shopfront/shop.db"
//! catalog = "/etc/shopfront/catalog.json"
//!
//! [store]
//! storage_key = "shop-state:v1"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shopfront_core::Catalog;
use shopfront_state::StoreConfig;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Catalog shipped with the binary, used when none is configured.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

const CONFIG_FILE: &str = "shopfront.toml";
const DB_FILE: &str = "shopfront.db";

/// Resolved CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite file holding the storage slot.
    /// Default: `shopfront.db` in the platform data dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// JSON product list. Default: built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Loads configuration: defaults, then file, then environment.
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&contents)?)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies `SHOPFRONT_*` values produced by `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("SHOPFRONT_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.db_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("SHOPFRONT_STORAGE_KEY") {
            debug!(key = %key, "Overriding storage key from environment");
            self.store.storage_key = key;
        }

        if let Some(path) = lookup("SHOPFRONT_CATALOG") {
            self.catalog = Some(PathBuf::from(path));
        }
    }

    pub fn validate(&self) -> CliResult<()> {
        self.store
            .validate()
            .map_err(|e| CliError::InvalidConfig(e.to_string()))?;

        if self.db_path.as_deref() == Some(Path::new("")) {
            return Err(CliError::InvalidConfig("db_path is empty".into()));
        }

        Ok(())
    }

    /// Database file to open, creating the data dir when defaulted.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.shopfront.shopfront/shopfront.db`
    /// - **Windows**: `%APPDATA%\shopfront\shopfront\data\shopfront.db`
    /// - **Linux**: `~/.local/share/shopfront/shopfront.db`
    pub fn database_path(&self) -> CliResult<PathBuf> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }

        let dirs = Self::project_dirs().ok_or(CliError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DB_FILE))
    }

    /// Loads the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> CliResult<Catalog> {
        let catalog = match &self.catalog {
            Some(path) => {
                debug!(?path, "Loading catalog");
                Catalog::from_json(&std::fs::read_to_string(path)?)?
            }
            None => Catalog::from_json(BUILTIN_CATALOG)?,
        };

        Ok(catalog)
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "shopfront", "shopfront")
    }

    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}
