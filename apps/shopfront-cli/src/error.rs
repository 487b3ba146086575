//! # CLI Error Type
//!
//! Unified error type for command execution.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the CLI                                │
//! │                                                                         │
//! │  startup:  config file / env ──► CliError::Config*                      │
//! │            open database     ──► CliError::Storage                      │
//! │            mount store       ──► CliError::State                        │
//! │                                                                         │
//! │  command:  bad id / quantity ──► CliError::Validation                   │
//! │            id not in catalog ──► CliError::UnknownProduct               │
//! │                                                                         │
//! │  Slot writes made by the store never reach here. They are logged and   │
//! │  the command still succeeds for this session.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use shopfront_core::{CoreError, ValidationError};
use shopfront_state::StateError;
use shopfront_storage::StorageError;
use thiserror::Error;

/// Errors surfaced to the user by the `shopfront` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `AppConfig`.
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration loaded but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No platform data directory and no explicit database path.
    #[error("Could not determine app data directory, set SHOPFRONT_DB_PATH")]
    NoDataDir,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CoreError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Product id not present in the catalog.
    #[error("Product not found: {0}")]
    UnknownProduct(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    State(#[from] StateError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
