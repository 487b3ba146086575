//! # Storage Slots
//!
//! A slot is a single durable key-value entry. The browser's origin-scoped
//! local storage is the model: a key maps to an opaque byte string that
//! survives restarts, and a write replaces the whole value.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SlotStorage                                                            │
//! │  ├── get(key)        → Option<bytes>   None = never written             │
//! │  └── set(key, bytes) → ()              full overwrite, last write wins  │
//! │                                                                         │
//! │  Implementations                                                        │
//! │  ├── MemorySlotStorage   process memory, tests and ephemeral sessions   │
//! │  └── SlotRepository      SQLite table, see `repository::slot`           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::trace;

use crate::error::{StorageError, StorageResult};

/// A durable key-value slot store.
///
/// Implementations must be safe to share across tasks. Neither method is
/// retried by callers; a failed `set` simply leaves the previous value.
#[async_trait]
pub trait SlotStorage: Send + Sync {
    /// Reads the value stored under `key`.
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Overwrites the value stored under `key`.
    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()>;
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// Slot storage held in process memory.
///
/// Nothing survives the process. Used by tests and by sessions that run
/// without a database.
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        MemorySlotStorage::default()
    }

    /// Creates storage with one slot already written.
    pub fn with_slot(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        MemorySlotStorage {
            slots: Mutex::new(slots),
        }
    }

    /// Synchronous read for assertions and diagnostics.
    pub fn peek(&self, key: &str) -> Option<Vec<u8>> {
        self.slots
            .lock()
            .ok()
            .and_then(|slots| slots.get(key).cloned())
    }

    fn locked(&self) -> StorageResult<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.slots
            .lock()
            .map_err(|_| StorageError::Internal("Slot map mutex poisoned".to_string()))
    }
}

#[async_trait]
impl SlotStorage for MemorySlotStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.locked()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        trace!(key, bytes = value.len(), "Writing memory slot");
        self.locked()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_slot_reads_none() {
        let storage = MemorySlotStorage::new();

        assert_eq!(storage.get("shop-state:v1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let storage = MemorySlotStorage::new();

        storage.set("k", b"one").await.unwrap();
        storage.set("k", b"two").await.unwrap();

        assert_eq!(storage.get("k").await.unwrap(), Some(b"two".to_vec()));
        assert_eq!(storage.peek("k"), Some(b"two".to_vec()));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let storage: Arc<dyn SlotStorage> = Arc::new(MemorySlotStorage::with_slot("k", "v"));

        assert_eq!(storage.get("k").await.unwrap(), Some(b"v".to_vec()));
        assert_eq!(storage.get("other").await.unwrap(), None);
    }
}
