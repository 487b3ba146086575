//! # Cart
//!
//! Mapping from product id to a positive quantity.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Invariants                                 │
//! │                                                                         │
//! │  • Every stored quantity is ≥ 1                                         │
//! │  • Absence means zero: removing the last unit deletes the entry         │
//! │  • Unknown ids are never an error: add creates, remove is a no-op       │
//! │                                                                         │
//! │  add("a", 2)     {a: 2}                                                 │
//! │  remove("a", 1)  {a: 1}                                                 │
//! │  remove("a", 5)  {}        ← max(0, 1 - 5) = 0, entry deleted           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One cart entry as seen by consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
}

/// The shopping cart.
///
/// Serializes as a plain JSON object (`{"<id>": <qty>, ...}`), which is the
/// `cart` field of the persisted snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds `qty` units of `id`, creating the entry if absent.
    ///
    /// A zero quantity changes nothing, so no zero entry can ever be created.
    /// Quantities saturate at `u32::MAX`.
    ///
    /// ## Returns
    /// The quantity stored for `id` afterwards.
    pub fn add(&mut self, id: &str, qty: u32) -> u32 {
        if qty == 0 {
            return self.qty(id);
        }

        let entry = self.items.entry(id.to_string()).or_insert(0);
        *entry = entry.saturating_add(qty);
        *entry
    }

    /// Removes `qty` units of `id`.
    ///
    /// The entry is deleted when the result would be ≤ 0.
    ///
    /// ## Returns
    /// `max(0, previous - qty)`.
    pub fn remove(&mut self, id: &str, qty: u32) -> u32 {
        let Some(current) = self.items.get_mut(id) else {
            return 0;
        };

        if *current > qty {
            *current -= qty;
            *current
        } else {
            self.items.remove(id);
            0
        }
    }

    /// Quantity stored for `id`, or 0 when absent.
    pub fn qty(&self, id: &str) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    /// Whether `id` has an entry.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Sum of all quantities.
    ///
    /// Widened to `u64` so a handful of saturated entries cannot overflow.
    pub fn total_quantity(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates `(id, quantity)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, &q)| (id.as_str(), q))
    }

    /// Owned listing of every entry, sorted by product id.
    pub fn lines(&self) -> Vec<CartLine> {
        self.iter()
            .map(|(id, quantity)| CartLine {
                product_id: id.to_string(),
                quantity,
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Cart {
    /// Builds a cart, skipping zero quantities and summing repeated ids.
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for (id, qty) in iter {
            cart.add(&id.into(), qty);
        }
        cart
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
