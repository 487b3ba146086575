//! # Repository Module
//!
//! Database repository implementations for Shopfront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ShopStore                                                              │
//! │       │                                                                 │
//! │       │  storage.set("shop-state:v1", bytes)                            │
//! │       ▼                                                                 │
//! │  SlotRepository (implements SlotStorage)                                │
//! │  ├── get(&self, key)                                                    │
//! │  ├── set(&self, key, value)      upsert, replaces the whole value       │
//! │  ├── updated_at(&self, key)                                             │
//! │  └── delete(&self, key)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  storage_slots table                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod slot;
