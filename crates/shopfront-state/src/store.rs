//! # Shop Store
//!
//! Tracks the cart and the favorites set, persists them, and reconciles the
//! persisted copy with in-memory state on load.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Consumer Action          Store Method             State Change         │
//! │  ───────────────          ────────────             ────────────         │
//! │                                                                         │
//! │  Click "add"   ──────────► add_to_cart(id, n) ───► cart[id] += n        │
//! │  Click "−"     ──────────► remove_from_cart() ───► cart[id] -= n,       │
//! │                                                    entry gone at 0      │
//! │  Click heart   ──────────► toggle_favorite(id) ──► flip membership      │
//! │  Render card   ──────────► get_qty / is_favorite    (read only)         │
//! │  Render badge  ──────────► cart_count / favorites_count (read only)     │
//! │                                                                         │
//! │  After hydration, every state change queues the full snapshot for      │
//! │  the slot writer. Before hydration nothing is written.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Hydration Race
//! Mutations issued between `mount` and hydration are applied and visible
//! right away. When the load lands with a snapshot, that snapshot replaces
//! cart and favorites wholesale; those early mutations are lost. If the
//! load finds nothing usable, in-memory state is kept and becomes the first
//! thing written.
//!
//! ## Thread Safety
//! State sits behind a `std::sync::Mutex`. Every operation holds it only for
//! the few map operations it performs and never across an `.await`.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shopfront_core::{Cart, Favorites, Snapshot, DEFAULT_QUANTITY};
use shopfront_storage::SlotStorage;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{StateError, StateResult};
use crate::persist::{PendingWrite, SlotWriter};
use crate::view::ShopView;

// =============================================================================
// Internal State
// =============================================================================

#[derive(Debug, Default)]
struct ShopState {
    cart: Cart,
    favorites: Favorites,
    hydrated: bool,
    /// Revision of the last snapshot queued for writing.
    revision: u64,
}

impl ShopState {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.cart.clone(), self.favorites.clone())
    }
}

pub(crate) struct StoreInner {
    config: StoreConfig,
    state: Mutex<ShopState>,
    pending_tx: watch::Sender<Option<PendingWrite>>,
    hydrated_rx: watch::Receiver<bool>,
    settled_rx: watch::Receiver<u64>,
    /// Bumped on every visible change, for consumers that re-render.
    changes_tx: watch::Sender<u64>,
    lifecycle: Mutex<Option<JoinHandle<()>>>,
}

impl StoreInner {
    /// A poisoned lock still holds a consistent cart: every mutation is a
    /// single map operation. Recover instead of propagating the panic.
    fn lock(&self) -> MutexGuard<'_, ShopState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn queue_write(&self, state: &mut ShopState) {
        state.revision += 1;
        self.pending_tx.send_replace(Some(PendingWrite {
            revision: state.revision,
            snapshot: state.snapshot(),
        }));
    }

    fn notify_change(&self) {
        self.changes_tx.send_modify(|n| *n += 1);
    }

    /// Called once by the slot writer when the initial load completes.
    pub(crate) fn apply_hydration(&self, loaded: Option<Snapshot>) {
        let mut state = self.lock();

        match loaded {
            Some(snapshot) => {
                info!(
                    cart_lines = snapshot.cart.len(),
                    favorites = snapshot.favorites.len(),
                    "Hydrated shop state from storage"
                );
                state.cart = snapshot.cart;
                state.favorites = snapshot.favorites;
            }
            None => info!(
                cart_lines = state.cart.len(),
                favorites = state.favorites.len(),
                "Nothing to hydrate, keeping in-memory state"
            ),
        }

        state.hydrated = true;
        self.queue_write(&mut state);
        drop(state);

        self.notify_change();
    }
}

// =============================================================================
// Shop Store
// =============================================================================

/// Handle to a mounted shop store.
///
/// Clones share the same state. Pass a clone to every consumer that needs
/// cart or favorites; there is no global instance.
///
/// ## Usage
/// ```rust,ignore
/// let storage: Arc<dyn SlotStorage> = Arc::new(db.slots());
/// let store = ShopStore::mount(storage, StoreConfig::default())?;
/// store.hydrated().await;
///
/// store.add_to_cart("mint-01", 2);
/// assert_eq!(store.get_qty("mint-01"), 2);
/// ```
#[derive(Clone)]
pub struct ShopStore {
    inner: Arc<StoreInner>,
}

impl ShopStore {
    /// Creates an empty store and starts loading `config.storage_key`.
    ///
    /// Returns immediately. The store is usable at once; see the module docs
    /// for what happens to mutations made before the load completes.
    ///
    /// ## Errors
    /// - `NoRuntime` when called outside a Tokio runtime
    /// - `InvalidConfig` for an empty storage key
    pub fn mount(storage: Arc<dyn SlotStorage>, config: StoreConfig) -> StateResult<Self> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| StateError::NoRuntime)?;

        let (pending_tx, pending_rx) = watch::channel(None);
        let (hydrated_tx, hydrated_rx) = watch::channel(false);
        let (settled_tx, settled_rx) = watch::channel(0);
        let (changes_tx, _) = watch::channel(0);

        let writer = SlotWriter::new(
            storage,
            config.storage_key.clone(),
            pending_rx,
            hydrated_tx,
            settled_tx,
        );

        let inner = Arc::new(StoreInner {
            config,
            state: Mutex::new(ShopState::default()),
            pending_tx,
            hydrated_rx,
            settled_rx,
            changes_tx,
            lifecycle: Mutex::new(None),
        });

        info!(key = %inner.config.storage_key, "Mounting shop store");
        let task = runtime.spawn(writer.run(Arc::downgrade(&inner)));
        *inner
            .lifecycle
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(task);

        Ok(ShopStore { inner })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Applies `f` and, when it reports a change, notifies consumers and
    /// queues a write (after hydration only).
    fn mutate<R>(&self, f: impl FnOnce(&mut ShopState) -> (R, bool)) -> R {
        let mut state = self.inner.lock();
        let (result, changed) = f(&mut state);

        if changed && state.hydrated {
            self.inner.queue_write(&mut state);
        }
        drop(state);

        if changed {
            self.inner.notify_change();
        }
        result
    }

    /// Adds `qty` units of `id`. Unknown ids get a fresh entry.
    ///
    /// A zero quantity is ignored.
    ///
    /// ## Returns
    /// The quantity now stored for `id`.
    pub fn add_to_cart(&self, id: &str, qty: u32) -> u32 {
        let stored = self.mutate(|state| (state.cart.add(id, qty), qty > 0));
        debug!(product_id = %id, qty, stored, "Added to cart");
        stored
    }

    /// `add_to_cart(id, 1)`.
    pub fn add_one(&self, id: &str) -> u32 {
        self.add_to_cart(id, DEFAULT_QUANTITY)
    }

    /// Removes `qty` units of `id`; the entry disappears when it reaches 0.
    ///
    /// ## Returns
    /// `max(0, previous - qty)`.
    pub fn remove_from_cart(&self, id: &str, qty: u32) -> u32 {
        let stored = self.mutate(|state| {
            let changed = qty > 0 && state.cart.contains(id);
            (state.cart.remove(id, qty), changed)
        });
        debug!(product_id = %id, qty, stored, "Removed from cart");
        stored
    }

    /// `remove_from_cart(id, 1)`.
    pub fn remove_one(&self, id: &str) -> u32 {
        self.remove_from_cart(id, DEFAULT_QUANTITY)
    }

    /// Flips favorite membership of `id`.
    ///
    /// ## Returns
    /// `true` if `id` is a favorite afterwards.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let now_favorite = self.mutate(|state| (state.favorites.toggle(id), true));
        debug!(product_id = %id, now_favorite, "Toggled favorite");
        now_favorite
    }

    /// Empties the cart. Favorites are untouched.
    pub fn clear_cart(&self) {
        self.mutate(|state| {
            let changed = !state.cart.is_empty();
            state.cart.clear();
            ((), changed)
        });
        debug!("Cleared cart");
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Quantity of `id` in the cart, 0 if never added.
    pub fn get_qty(&self, id: &str) -> u32 {
        self.inner.lock().cart.qty(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.inner.lock().favorites.contains(id)
    }

    /// Sum of all cart quantities.
    pub fn cart_count(&self) -> u64 {
        self.inner.lock().cart.total_quantity()
    }

    /// Number of favorites.
    pub fn favorites_count(&self) -> usize {
        self.inner.lock().favorites.len()
    }

    /// Owned copy of the cart.
    pub fn cart(&self) -> Cart {
        self.inner.lock().cart.clone()
    }

    /// Owned copy of the favorites set.
    pub fn favorites(&self) -> Favorites {
        self.inner.lock().favorites.clone()
    }

    /// The `{cart, favorites}` pair as it would be persisted right now.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }

    /// Everything a consumer renders, read under one lock.
    pub fn view(&self) -> ShopView {
        let state = self.inner.lock();
        ShopView {
            cart: state.cart.lines(),
            favorites: state.favorites.to_vec(),
            cart_count: state.cart.total_quantity(),
            favorites_count: state.favorites.len(),
            hydrated: state.hydrated,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Whether the initial load has been applied.
    pub fn is_hydrated(&self) -> bool {
        self.inner.lock().hydrated
    }

    /// Waits for the initial load.
    ///
    /// ## Returns
    /// `false` if the store was unmounted before the load completed.
    pub async fn hydrated(&self) -> bool {
        let mut rx = self.inner.hydrated_rx.clone();
        let _ = rx.wait_for(|hydrated| *hydrated).await;
        self.is_hydrated()
    }

    /// Waits until every queued snapshot has been handed to storage.
    ///
    /// A failed write counts as handled. Returns at once when nothing is
    /// queued or the store has been unmounted.
    pub async fn flush(&self) {
        let target = self.inner.lock().revision;
        let mut rx = self.inner.settled_rx.clone();
        let _ = rx.wait_for(|settled| *settled >= target).await;
    }

    /// Receiver bumped on every visible change (mutations and hydration).
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.inner.changes_tx.subscribe()
    }

    /// Stops the lifecycle task.
    ///
    /// An in-flight load is abandoned and its result discarded, and queued
    /// snapshots are not written. Other clones keep working in memory.
    pub fn unmount(self) {
        let task = self
            .inner
            .lifecycle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(task) = task {
            task.abort();
            info!(key = %self.inner.config.storage_key, "Unmounted shop store");
        }
    }
}

impl fmt::Debug for ShopStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("ShopStore")
            .field("storage_key", &self.inner.config.storage_key)
            .field("cart_lines", &state.cart.len())
            .field("favorites", &state.favorites.len())
            .field("hydrated", &state.hydrated)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shopfront_storage::{MemorySlotStorage, StorageError, StorageResult};
    use tokio::sync::oneshot;

    const KEY: &str = "shop-state:v1";

    // -------------------------------------------------------------------------
    // Fakes
    // -------------------------------------------------------------------------

    /// `get` blocks until the test releases it; `set` records every write.
    struct GatedStorage {
        gate: std::sync::Mutex<Option<oneshot::Receiver<Option<Vec<u8>>>>>,
        writes: std::sync::Mutex<Vec<Vec<u8>>>,
    }

    impl GatedStorage {
        fn new() -> (Arc<Self>, oneshot::Sender<Option<Vec<u8>>>) {
            let (tx, rx) = oneshot::channel();
            let storage = Arc::new(GatedStorage {
                gate: std::sync::Mutex::new(Some(rx)),
                writes: std::sync::Mutex::new(Vec::new()),
            });
            (storage, tx)
        }

        fn writes(&self) -> Vec<Vec<u8>> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SlotStorage for GatedStorage {
        async fn get(&self, _key: &str) -> StorageResult<Option<Vec<u8>>> {
            let gate = self.gate.lock().unwrap().take();
            match gate {
                Some(rx) => Ok(rx.await.unwrap_or(None)),
                None => Ok(None),
            }
        }

        async fn set(&self, _key: &str, value: &[u8]) -> StorageResult<()> {
            self.writes.lock().unwrap().push(value.to_vec());
            Ok(())
        }
    }

    /// Every operation fails, like a private-mode or over-quota browser.
    #[derive(Default)]
    struct BrokenStorage {
        attempts: std::sync::Mutex<usize>,
    }

    #[async_trait]
    impl SlotStorage for BrokenStorage {
        async fn get(&self, _key: &str) -> StorageResult<Option<Vec<u8>>> {
            Err(StorageError::Unavailable("storage disabled".into()))
        }

        async fn set(&self, _key: &str, _value: &[u8]) -> StorageResult<()> {
            *self.attempts.lock().unwrap() += 1;
            Err(StorageError::Unavailable("quota exceeded".into()))
        }
    }

    async fn mounted(storage: Arc<MemorySlotStorage>) -> ShopStore {
        let store = ShopStore::mount(storage, StoreConfig::default()).unwrap();
        assert!(store.hydrated().await);
        store
    }

    fn persisted(storage: &MemorySlotStorage) -> Snapshot {
        Snapshot::decode(&storage.peek(KEY).expect("slot written")).expect("valid snapshot")
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_and_remove_quantities() {
        let store = mounted(Arc::new(MemorySlotStorage::new())).await;

        assert_eq!(store.add_to_cart("a", 3), 3);
        assert_eq!(store.add_one("a"), 4);
        assert_eq!(store.add_to_cart("b", 2), 2);
        assert_eq!(store.remove_from_cart("a", 1), 3);
        assert_eq!(store.remove_from_cart("b", 5), 0);

        assert_eq!(store.get_qty("a"), 3);
        assert_eq!(store.get_qty("b"), 0);
        assert_eq!(store.get_qty("never-added"), 0);
        assert_eq!(store.cart_count(), 3);
    }

    #[tokio::test]
    async fn test_removing_last_unit_drops_entry() {
        let store = mounted(Arc::new(MemorySlotStorage::new())).await;

        store.add_to_cart("a", 1);
        store.remove_from_cart("a", 1);

        assert_eq!(store.get_qty("a"), 0);
        assert!(!store.cart().contains("a"));
        assert!(store.view().cart.is_empty());
        assert_eq!(store.cart_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_quantity_is_noop() {
        let store = mounted(Arc::new(MemorySlotStorage::new())).await;

        assert_eq!(store.add_to_cart("a", 0), 0);
        assert!(store.cart().is_empty());

        store.add_to_cart("b", 2);
        assert_eq!(store.remove_from_cart("b", 0), 2);
    }

    #[tokio::test]
    async fn test_toggle_favorite_twice_restores() {
        let store = mounted(Arc::new(MemorySlotStorage::new())).await;

        assert!(store.toggle_favorite("a"));
        assert!(store.is_favorite("a"));
        assert_eq!(store.favorites_count(), 1);

        assert!(!store.toggle_favorite("a"));
        assert!(!store.is_favorite("a"));
        assert_eq!(store.favorites_count(), 0);
    }

    #[tokio::test]
    async fn test_counts_update_synchronously() {
        let store = mounted(Arc::new(MemorySlotStorage::new())).await;
        let reader = store.clone();
        let changes = store.changes();
        let seen = *changes.borrow();

        store.add_to_cart("a", 2);
        assert_eq!(reader.cart_count(), 2);

        store.add_to_cart("b", 5);
        assert_eq!(reader.cart_count(), 7);

        store.toggle_favorite("a");
        store.toggle_favorite("b");
        assert_eq!(reader.favorites_count(), 2);

        let view = reader.view();
        assert_eq!(view.cart_count, 7);
        assert_eq!(view.favorites_count, 2);
        assert_eq!(view.qty("b"), 5);
        assert_eq!(*changes.borrow(), seen + 4);
    }

    #[tokio::test]
    async fn test_clear_cart_keeps_favorites() {
        let storage = Arc::new(MemorySlotStorage::new());
        let store = mounted(storage.clone()).await;

        store.add_to_cart("a", 2);
        store.toggle_favorite("a");
        store.clear_cart();
        store.flush().await;

        assert_eq!(store.cart_count(), 0);
        assert!(store.is_favorite("a"));
        assert!(persisted(&storage).cart.is_empty());
    }

    // -------------------------------------------------------------------------
    // Hydration
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_hydrates_from_persisted_snapshot() {
        let storage = Arc::new(MemorySlotStorage::with_slot(
            KEY,
            r#"{"cart":{"a":2,"b":1},"favorites":["a"]}"#,
        ));
        let store = mounted(storage).await;

        assert_eq!(store.get_qty("a"), 2);
        assert_eq!(store.get_qty("b"), 1);
        assert!(store.is_favorite("a"));
        assert!(!store.is_favorite("b"));
        assert_eq!(store.cart_count(), 3);
    }

    #[tokio::test]
    async fn test_malformed_payloads_hydrate_empty() {
        for payload in ["not json", r#"{"cart": "oops"}"#, "[]", ""] {
            let storage = Arc::new(MemorySlotStorage::with_slot(KEY, payload));
            let store = mounted(storage).await;

            assert!(store.is_hydrated(), "payload {payload:?}");
            assert_eq!(store.cart_count(), 0, "payload {payload:?}");
            assert_eq!(store.favorites_count(), 0, "payload {payload:?}");
        }
    }

    #[tokio::test]
    async fn test_custom_storage_key() {
        let storage = Arc::new(MemorySlotStorage::with_slot("other:v2", r#"{"cart":{"z":9}}"#));
        let config = StoreConfig::default().storage_key("other:v2");
        let store = ShopStore::mount(storage.clone(), config).unwrap();
        store.hydrated().await;

        assert_eq!(store.get_qty("z"), 9);
        store.add_one("z");
        store.flush().await;
        assert!(storage.peek(KEY).is_none());
        assert!(storage.peek("other:v2").is_some());
    }

    #[tokio::test]
    async fn test_hydration_overwrites_early_mutations() {
        let (storage, release) = GatedStorage::new();
        let store = ShopStore::mount(storage.clone(), StoreConfig::default()).unwrap();

        // Accepted and visible before the load lands.
        store.add_to_cart("early", 3);
        store.toggle_favorite("early");
        assert_eq!(store.get_qty("early"), 3);
        assert!(!store.is_hydrated());

        release
            .send(Some(br#"{"cart":{"a":2},"favorites":["b"]}"#.to_vec()))
            .unwrap();
        assert!(store.hydrated().await);

        // Replaced wholesale, not merged.
        assert_eq!(store.get_qty("early"), 0);
        assert!(!store.is_favorite("early"));
        assert_eq!(store.get_qty("a"), 2);
        assert!(store.is_favorite("b"));
        assert_eq!(store.cart_count(), 2);
    }

    #[tokio::test]
    async fn test_no_writes_before_hydration() {
        let (storage, release) = GatedStorage::new();
        let store = ShopStore::mount(storage.clone(), StoreConfig::default()).unwrap();

        store.add_to_cart("early", 1);
        store.flush().await;
        tokio::task::yield_now().await;
        assert!(storage.writes().is_empty());

        // Nothing persisted: in-memory state survives and is written.
        release.send(None).unwrap();
        store.hydrated().await;
        store.flush().await;

        let writes = storage.writes();
        assert_eq!(writes.len(), 1);
        let written = Snapshot::decode(&writes[0]).unwrap();
        assert_eq!(written.cart.qty("early"), 1);
    }

    #[tokio::test]
    async fn test_unmount_discards_pending_load() {
        let (storage, release) = GatedStorage::new();
        let store = ShopStore::mount(storage.clone(), StoreConfig::default()).unwrap();
        let consumer = store.clone();

        consumer.add_to_cart("a", 1);
        store.unmount();

        // Receiver may already be gone with the aborted task.
        let _ = release.send(Some(br#"{"cart":{"b":5},"favorites":[]}"#.to_vec()));

        assert!(!consumer.hydrated().await);
        assert_eq!(consumer.get_qty("a"), 1);
        assert_eq!(consumer.get_qty("b"), 0);
        assert!(storage.writes().is_empty());
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_mutations_write_through() {
        let storage = Arc::new(MemorySlotStorage::new());
        let store = mounted(storage.clone()).await;

        store.add_to_cart("a", 2);
        store.add_to_cart("b", 1);
        store.toggle_favorite("a");
        store.flush().await;

        let snapshot = persisted(&storage);
        assert_eq!(snapshot, store.snapshot());
        assert_eq!(snapshot.cart.qty("a"), 2);
        assert!(snapshot.favorites.contains("a"));
    }

    #[tokio::test]
    async fn test_hydration_writes_loaded_state_back() {
        let raw = r#"{"favorites":["b","a"],"cart":{"a":2}}"#;
        let storage = Arc::new(MemorySlotStorage::with_slot(KEY, raw));
        let store = mounted(storage.clone()).await;
        store.flush().await;

        let rewritten = String::from_utf8(storage.peek(KEY).unwrap()).unwrap();
        assert_eq!(rewritten, r#"{"cart":{"a":2},"favorites":["a","b"]}"#);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let storage = Arc::new(MemorySlotStorage::new());
        let store = mounted(storage.clone()).await;

        for i in 0..50u32 {
            store.add_to_cart(&format!("p{}", i % 7), i + 1);
            if i % 3 == 0 {
                store.remove_from_cart(&format!("p{}", i % 5), 2);
            }
        }
        store.flush().await;

        assert_eq!(persisted(&storage), store.snapshot());
    }

    #[tokio::test]
    async fn test_reload_round_trip() {
        let storage = Arc::new(MemorySlotStorage::new());

        let first = mounted(storage.clone()).await;
        first.add_to_cart("a", 2);
        first.add_to_cart("b", 1);
        first.toggle_favorite("a");
        first.flush().await;
        drop(first);

        let second = mounted(storage).await;
        assert_eq!(second.get_qty("a"), 2);
        assert_eq!(second.get_qty("b"), 1);
        assert!(second.is_favorite("a"));
        assert!(!second.is_favorite("b"));
    }

    #[tokio::test]
    async fn test_dropped_store_drains_last_write() {
        let storage = Arc::new(MemorySlotStorage::new());
        let store = mounted(storage.clone()).await;
        store.flush().await;

        store.add_to_cart("late", 4);
        drop(store);

        for _ in 0..100 {
            if storage
                .peek(KEY)
                .and_then(|raw| Snapshot::decode(&raw))
                .is_some_and(|s| s.cart.qty("late") == 4)
            {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("last snapshot was never written");
    }

    #[tokio::test]
    async fn test_storage_failures_are_swallowed() {
        let storage = Arc::new(BrokenStorage::default());
        let store = ShopStore::mount(storage.clone(), StoreConfig::default()).unwrap();

        assert!(store.hydrated().await);

        store.add_to_cart("a", 2);
        store.toggle_favorite("a");
        store.flush().await;

        assert_eq!(store.get_qty("a"), 2);
        assert!(store.is_favorite("a"));
        assert!(*storage.attempts.lock().unwrap() >= 1);
    }

    // -------------------------------------------------------------------------
    // Wiring
    // -------------------------------------------------------------------------

    #[test]
    fn test_mount_outside_runtime_fails() {
        let storage = Arc::new(MemorySlotStorage::new());

        let result = ShopStore::mount(storage, StoreConfig::default());
        assert!(matches!(result, Err(StateError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_mount_rejects_empty_key() {
        let storage = Arc::new(MemorySlotStorage::new());

        let result = ShopStore::mount(storage, StoreConfig::default().storage_key(""));
        assert!(matches!(result, Err(StateError::InvalidConfig(_))));
    }
}
