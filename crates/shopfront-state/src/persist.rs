//! # Slot Writer
//!
//! The store's one background task. It loads the slot once, hands the result
//! to the store, then becomes the slot's only writer.
//!
//! ## Task Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Lifecycle Task                                    │
//! │                                                                         │
//! │  1. storage.get(key)                                                   │
//! │       │   Ok(bytes)  → Snapshot::decode (None if malformed)            │
//! │       │   Ok(None)   → None                                            │
//! │       │   Err(e)     → warn!, None                                     │
//! │       ▼                                                                 │
//! │  2. store gone? ──yes──► discard result, exit                          │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  3. store.apply_hydration(loaded)  → replaces state, queues a write    │
//! │       ▼                                                                 │
//! │  4. loop: wait for queued snapshot                                      │
//! │           take the NEWEST one (older queued ones are skipped)           │
//! │           encode + storage.set, failures → warn!, no retry             │
//! │           publish settled revision (flush waits on it)                 │
//! │       ▼                                                                 │
//! │  5. every store handle dropped → drain last snapshot, exit             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because a single task performs every write, writes never interleave and
//! the slot always ends up holding the latest queued snapshot.

use std::sync::{Arc, Weak};

use shopfront_core::Snapshot;
use shopfront_storage::SlotStorage;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::store::StoreInner;

/// A snapshot waiting to be written.
#[derive(Debug, Clone)]
pub(crate) struct PendingWrite {
    /// Monotonic per store; the writer reports the last one it settled.
    pub revision: u64,
    pub snapshot: Snapshot,
}

/// Owns the storage handle and the write side of the lifecycle.
pub(crate) struct SlotWriter {
    storage: Arc<dyn SlotStorage>,
    key: String,
    /// Queued snapshots from the store.
    pending_rx: watch::Receiver<Option<PendingWrite>>,
    /// Flipped once hydration has been applied. Dropped with the task.
    hydrated_tx: watch::Sender<bool>,
    /// Last revision handed to storage.
    settled_tx: watch::Sender<u64>,
}

impl SlotWriter {
    pub(crate) fn new(
        storage: Arc<dyn SlotStorage>,
        key: String,
        pending_rx: watch::Receiver<Option<PendingWrite>>,
        hydrated_tx: watch::Sender<bool>,
        settled_tx: watch::Sender<u64>,
    ) -> Self {
        SlotWriter {
            storage,
            key,
            pending_rx,
            hydrated_tx,
            settled_tx,
        }
    }

    /// Runs the lifecycle. Spawned once per mounted store.
    pub(crate) async fn run(mut self, store: Weak<StoreInner>) {
        let loaded = self.load().await;

        // Store gone while loading: nobody to hydrate.
        let Some(inner) = store.upgrade() else {
            debug!(key = %self.key, "Store dropped before hydration, discarding load");
            return;
        };
        inner.apply_hydration(loaded);
        drop(inner);
        self.hydrated_tx.send_replace(true);

        while self.pending_rx.changed().await.is_ok() {
            let pending = self.pending_rx.borrow_and_update().clone();
            if let Some(pending) = pending {
                self.write(&pending).await;
                self.settled_tx.send_replace(pending.revision);
            }
        }

        debug!(key = %self.key, "All store handles dropped, slot writer exiting");
    }

    async fn load(&self) -> Option<Snapshot> {
        match self.storage.get(&self.key).await {
            Ok(Some(raw)) => {
                let snapshot = Snapshot::decode(&raw);
                if snapshot.is_none() {
                    warn!(key = %self.key, bytes = raw.len(), "Persisted state unreadable, starting empty");
                }
                snapshot
            }
            Ok(None) => {
                info!(key = %self.key, "No persisted state found");
                None
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read persisted state, continuing in memory");
                None
            }
        }
    }

    /// Best-effort write. Failures only cost durability.
    async fn write(&self, pending: &PendingWrite) {
        let bytes = match pending.snapshot.encode() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(revision = pending.revision, error = %e, "Failed to encode snapshot, skipping write");
                return;
            }
        };

        match self.storage.set(&self.key, &bytes).await {
            Ok(()) => debug!(
                key = %self.key,
                revision = pending.revision,
                bytes = bytes.len(),
                "Persisted shop state"
            ),
            Err(e) => warn!(
                key = %self.key,
                revision = pending.revision,
                error = %e,
                "Failed to persist shop state, keeping in-memory copy"
            ),
        }
    }
}
