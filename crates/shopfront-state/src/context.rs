//! # Shop Provider
//!
//! Scopes one mounted store. Consumers ask the provider for the store rather
//! than holding a global; asking after the provider is gone is a wiring bug
//! and fails loudly.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ShopProvider::mount ──► Some(store) ──► use_shop() → ShopStore clone   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  provider.unmount()  ──► None        ──► use_shop() → panic             │
//! │                                          try_use_shop() → Err           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopfront_storage::SlotStorage;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{StateError, StateResult};
use crate::store::ShopStore;

/// Owner of the store for a session scope.
#[derive(Debug, Default)]
pub struct ShopProvider {
    store: Mutex<Option<ShopStore>>,
}

impl ShopProvider {
    /// Mounts a store on `storage` and scopes it to this provider.
    pub fn mount(storage: Arc<dyn SlotStorage>, config: StoreConfig) -> StateResult<Self> {
        let store = ShopStore::mount(storage, config)?;
        Ok(ShopProvider::with_store(store))
    }

    /// Scopes an already mounted store.
    pub fn with_store(store: ShopStore) -> Self {
        ShopProvider {
            store: Mutex::new(Some(store)),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<ShopStore>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the scoped store.
    ///
    /// ## Panics
    /// When the provider has no store (unmounted or never mounted).
    pub fn use_shop(&self) -> ShopStore {
        match self.try_use_shop() {
            Ok(store) => store,
            Err(e) => panic!("{e}"),
        }
    }

    /// Non-panicking [`use_shop`](Self::use_shop).
    pub fn try_use_shop(&self) -> StateResult<ShopStore> {
        self.slot().clone().ok_or(StateError::OutsideProvider)
    }

    pub fn is_mounted(&self) -> bool {
        self.slot().is_some()
    }

    /// Ends the scope and stops the store's lifecycle task.
    ///
    /// Store handles obtained earlier keep their in-memory state.
    pub fn unmount(&self) {
        if let Some(store) = self.slot().take() {
            debug!("Shop provider unmounted");
            store.unmount();
        }
    }
}

impl Drop for ShopProvider {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_storage::MemorySlotStorage;

    fn provider() -> ShopProvider {
        ShopProvider::mount(Arc::new(MemorySlotStorage::new()), StoreConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_consumers_share_one_store() {
        let provider = provider();
        let card = provider.use_shop();
        let sidebar = provider.use_shop();
        card.hydrated().await;

        card.add_to_cart("a", 2);
        card.toggle_favorite("a");

        assert_eq!(sidebar.cart_count(), 2);
        assert_eq!(sidebar.favorites_count(), 1);
    }

    #[tokio::test]
    async fn test_try_use_after_unmount_errors() {
        let provider = provider();
        assert!(provider.is_mounted());

        provider.unmount();

        assert!(!provider.is_mounted());
        assert!(matches!(
            provider.try_use_shop(),
            Err(StateError::OutsideProvider)
        ));
    }

    #[test]
    #[should_panic(expected = "use_shop must be used within ShopProvider")]
    fn test_use_outside_provider_panics() {
        let provider = ShopProvider::default();
        provider.use_shop();
    }

    #[tokio::test]
    async fn test_earlier_handles_survive_unmount() {
        let provider = provider();
        let store = provider.use_shop();
        store.hydrated().await;
        store.add_one("a");

        provider.unmount();

        assert_eq!(store.get_qty("a"), 1);
        assert_eq!(store.add_one("a"), 2);
    }
}
