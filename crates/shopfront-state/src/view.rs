//! # Read-Only Views
//!
//! What consumers (product cards, sidebar badges) get to see. Views are owned
//! copies, never handles into the store.

use serde::Serialize;
use shopfront_core::CartLine;
use ts_rs::TS;

/// Point-in-time copy of the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShopView {
    /// Cart entries sorted by product id. Zero quantities never appear.
    pub cart: Vec<CartLine>,
    /// Favorite product ids, sorted.
    pub favorites: Vec<String>,
    /// Sum of all cart quantities.
    pub cart_count: u64,
    pub favorites_count: usize,
    /// Whether the persisted snapshot has been loaded yet.
    pub hydrated: bool,
}

impl ShopView {
    /// Quantity for `id` as of this view.
    pub fn qty(&self, id: &str) -> u32 {
        self.cart
            .iter()
            .find(|line| line.product_id == id)
            .map_or(0, |line| line.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ShopView {
        ShopView {
            cart: vec![CartLine {
                product_id: "a".into(),
                quantity: 2,
            }],
            favorites: vec!["b".into()],
            cart_count: 2,
            favorites_count: 1,
            hydrated: true,
        }
    }

    #[test]
    fn test_qty_lookup() {
        let view = view();

        assert_eq!(view.qty("a"), 2);
        assert_eq!(view.qty("b"), 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(view()).unwrap();

        assert_eq!(json["cartCount"], 2);
        assert_eq!(json["favoritesCount"], 1);
        assert_eq!(json["cart"][0]["productId"], "a");
    }
}
