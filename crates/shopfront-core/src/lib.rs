//! # shopfront-core: Pure Domain Logic for Shopfront
//!
//! Everything the shop store needs to reason about carts and favorites,
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Consumers (product cards, sidebar badges)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ShopStore handle                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopfront-state (ShopStore)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │ favorites │  │ snapshot  │  │  catalog  │  │   │
//! │  │   │   Cart    │  │ Favorites │  │ Snapshot  │  │  Product  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              shopfront-storage (durable slot)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Product id → positive quantity mapping
//! - [`favorites`] - Set of favorite product ids
//! - [`snapshot`] - Persisted `{cart, favorites}` document and its lenient decoder
//! - [`catalog`] - Read-only product records and the search/category filter
//! - [`validation`] - Input checks for catalog data and CLI arguments
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Cart, Favorites, Snapshot};
//!
//! let mut cart = Cart::new();
//! cart.add("a", 2);
//! cart.remove("a", 5);
//! assert_eq!(cart.qty("a"), 0);
//! assert!(!cart.contains("a"));
//!
//! let mut favorites = Favorites::new();
//! assert!(favorites.toggle("a"));
//!
//! let bytes = Snapshot::new(cart, favorites).encode().unwrap();
//! let restored = Snapshot::decode(&bytes).unwrap();
//! assert!(restored.favorites.contains("a"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod snapshot;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{Availability, Badge, Catalog, CatalogFilter, Product};
pub use error::{CoreError, CoreResult, ValidationError};
pub use favorites::Favorites;
pub use snapshot::Snapshot;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Key of the durable slot holding the persisted snapshot.
///
/// The `:v1` suffix versions the schema. A new schema gets a new key and the
/// old slot is simply never read again.
pub const STORAGE_KEY: &str = "shop-state:v1";

/// Quantity used by the single-unit cart operations.
pub const DEFAULT_QUANTITY: u32 = 1;
