//! # shopfront-state: Shop Store for Shopfront
//!
//! This crate holds the session's cart and favorites, keeps them durable in a
//! single storage slot, and reconciles the two on startup.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shop Store Architecture                         │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     ShopProvider (scope owner)                   │  │
//! │  │  use_shop() → ShopStore handle, panics once unmounted           │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │                               ▼                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     ShopStore (Arc, clonable)                    │  │
//! │  │  Mutex<cart, favorites, hydrated>                                │  │
//! │  │  Mutations are synchronous; counts are correct on return         │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │ watch: newest snapshot                  │
//! │                               ▼                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     SlotWriter (one Tokio task)                  │  │
//! │  │  load once → hydrate (replace) → write every newer snapshot      │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                 dyn SlotStorage ("shop-state:v1")                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`config`] - Store configuration (storage key)
//! - [`context`] - `ShopProvider` scope and `use_shop`
//! - [`error`] - Wiring errors
//! - [`store`] - `ShopStore` operations and hydration
//! - [`view`] - Read-only `ShopView`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopfront_state::{ShopProvider, StoreConfig};
//! use shopfront_storage::Database;
//!
//! let db = Database::new(DbConfig::new("shop.db")).await?;
//! let provider = ShopProvider::mount(Arc::new(db.slots()), StoreConfig::default())?;
//!
//! let store = provider.use_shop();
//! store.hydrated().await;
//! store.add_to_cart("mint-01", 2);
//! store.flush().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod context;
pub mod error;
mod persist;
pub mod store;
pub mod view;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use context::ShopProvider;
pub use error::{StateError, StateResult};
pub use store::ShopStore;
pub use view::ShopView;
