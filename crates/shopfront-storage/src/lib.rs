//! # shopfront-storage: Durable Storage Slots for Shopfront
//!
//! The shop store persists one document into one durable key-value slot.
//! This crate defines that seam and provides the backends behind it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Data Flow                              │
//! │                                                                         │
//! │  ShopStore (hydrate once, then write-through)                          │
//! │       │                                                                 │
//! │       ▼  Arc<dyn SlotStorage>                                           │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shopfront-storage (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────────┐   ┌───────────────┐   ┌──────────────┐ │   │
//! │  │   │ MemorySlotStorage │   │   Database    │   │  Migrations  │ │   │
//! │  │   │   (slot.rs)       │   │   (pool.rs)   │   │  (embedded)  │ │   │
//! │  │   │                   │   │ SqlitePool    │   │ 001_storage_ │ │   │
//! │  │   │ HashMap in RAM    │   │ SlotRepository│   │   slots.sql  │ │   │
//! │  │   └───────────────────┘   └───────────────┘   └──────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file in the platform data directory                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`slot`] - The `SlotStorage` trait and the in-memory backend
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - SQLite slot repository
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopfront_storage::{Database, DbConfig, SlotStorage};
//!
//! let db = Database::new(DbConfig::new("path/to/shop.db")).await?;
//! let slots: Arc<dyn SlotStorage> = Arc::new(db.slots());
//!
//! slots.set("shop-state:v1", br#"{"cart":{},"favorites":[]}"#).await?;
//! let raw = slots.get("shop-state:v1").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod slot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use pool::{Database, DbConfig};
pub use repository::slot::SlotRepository;
pub use slot::{MemorySlotStorage, SlotStorage};
