//! # Store Configuration
//!
//! ```toml
//! # [store] table of shopfront.toml
//! storage_key = "shop-state:v1"
//! ```

use serde::{Deserialize, Serialize};
use shopfront_core::STORAGE_KEY;

use crate::error::{StateError, StateResult};

/// Settings for one mounted store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Durable slot the snapshot lives in.
    /// Default: `shop-state:v1`
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            storage_key: default_storage_key(),
        }
    }
}

impl StoreConfig {
    /// Sets the storage key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn validate(&self) -> StateResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(StateError::InvalidConfig("storage_key is empty".into()));
        }

        Ok(())
    }
}
