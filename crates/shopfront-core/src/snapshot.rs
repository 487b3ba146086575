//! # Persisted Snapshot
//!
//! The `{cart, favorites}` document written to the durable slot.
//!
//! ## Wire Format
//! ```text
//! { "cart": { "<productId>": <positiveInteger>, ... },
//!   "favorites": ["<productId>", ...] }
//! ```
//!
//! ## Decoding Is Lenient
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input                                │  Result                         │
//! │  ─────────────────────────────────────┼──────────────────────────────── │
//! │  empty / not JSON / not UTF-8         │  None  (no prior state)         │
//! │  JSON, top level not an object        │  None                           │
//! │  object, "cart" missing or not object │  Some, cart empty               │
//! │  cart entry not a positive integer    │  entry dropped                  │
//! │  "favorites" missing or not array     │  Some, favorites empty          │
//! │  favorites element not a string       │  element dropped                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! A decode never fails loudly. What was dropped is logged and forgotten.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::favorites::Favorites;

/// Serialized form of the shop state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub cart: Cart,
    pub favorites: Favorites,
}

impl Snapshot {
    pub fn new(cart: Cart, favorites: Favorites) -> Self {
        Snapshot { cart, favorites }
    }

    /// Serializes to UTF-8 JSON bytes.
    pub fn encode(&self) -> CoreResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(CoreError::SnapshotEncode)
    }

    /// Parses persisted bytes.
    ///
    /// ## Returns
    /// - `None` when there is nothing usable (see module docs)
    /// - `Some(snapshot)` when the top level is an object; malformed fields
    ///   inside it fall back to empty
    pub fn decode(raw: &[u8]) -> Option<Snapshot> {
        if raw.is_empty() {
            return None;
        }

        let value: Value = match serde_json::from_slice(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Persisted snapshot is not valid JSON, ignoring");
                return None;
            }
        };

        let Value::Object(root) = value else {
            warn!("Persisted snapshot is not a JSON object, ignoring");
            return None;
        };

        Some(Snapshot {
            cart: decode_cart(&root),
            favorites: decode_favorites(&root),
        })
    }
}

fn decode_cart(root: &Map<String, Value>) -> Cart {
    let entries = match root.get("cart") {
        Some(Value::Object(entries)) => entries,
        Some(other) => {
            warn!(kind = kind_of(other), "Snapshot cart is not an object, using empty cart");
            return Cart::new();
        }
        None => return Cart::new(),
    };

    entries
        .iter()
        .filter_map(|(id, qty)| match qty.as_u64() {
            Some(n) if n > 0 => Some((id.as_str(), u32::try_from(n).unwrap_or(u32::MAX))),
            _ => {
                debug!(product_id = %id, "Dropping cart entry without a positive quantity");
                None
            }
        })
        .collect()
}

fn decode_favorites(root: &Map<String, Value>) -> Favorites {
    let ids = match root.get("favorites") {
        Some(Value::Array(ids)) => ids,
        Some(other) => {
            warn!(kind = kind_of(other), "Snapshot favorites is not a list, using empty set");
            return Favorites::new();
        }
        None => return Favorites::new(),
    };

    ids.iter()
        .filter_map(|id| match id {
            Value::String(id) => Some(id.as_str()),
            other => {
                debug!(kind = kind_of(other), "Dropping non-string favorite");
                None
            }
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> Option<Snapshot> {
        Snapshot::decode(raw.as_bytes())
    }

    #[test]
    fn test_encode_shape() {
        let snapshot = Snapshot::new(
            [("b", 1), ("a", 2)].into_iter().collect(),
            ["a"].into_iter().collect(),
        );

        let json = String::from_utf8(snapshot.encode().unwrap()).unwrap();
        assert_eq!(json, r#"{"cart":{"a":2,"b":1},"favorites":["a"]}"#);
    }

    #[test]
    fn test_decode_round_trip() {
        let snapshot = decode(r#"{"cart":{"a":2,"b":1},"favorites":["a"]}"#).unwrap();

        assert_eq!(snapshot.cart.qty("a"), 2);
        assert_eq!(snapshot.cart.qty("b"), 1);
        assert!(snapshot.favorites.contains("a"));
        assert!(!snapshot.favorites.contains("b"));
    }

    #[test]
    fn test_not_json_is_no_state() {
        assert!(decode("not json").is_none());
        assert!(decode("").is_none());
        assert!(Snapshot::decode(&[0xff, 0xfe, 0x00]).is_none());
    }

    #[test]
    fn test_non_object_is_no_state() {
        assert!(decode("null").is_none());
        assert!(decode("[1,2]").is_none());
        assert!(decode("\"shop\"").is_none());
    }

    #[test]
    fn test_malformed_cart_falls_back_to_empty() {
        let snapshot = decode(r#"{"cart":"oops"}"#).unwrap();

        assert!(snapshot.cart.is_empty());
        assert!(snapshot.favorites.is_empty());
    }

    #[test]
    fn test_malformed_fields_are_independent() {
        let snapshot = decode(r#"{"cart":[1,2],"favorites":["a","b"]}"#).unwrap();
        assert!(snapshot.cart.is_empty());
        assert_eq!(snapshot.favorites.len(), 2);

        let snapshot = decode(r#"{"cart":{"a":1},"favorites":{"a":true}}"#).unwrap();
        assert_eq!(snapshot.cart.qty("a"), 1);
        assert!(snapshot.favorites.is_empty());
    }

    #[test]
    fn test_bad_entries_are_dropped() {
        let snapshot = decode(
            r#"{"cart":{"a":0,"b":-3,"c":1.5,"d":"2","e":4},
                "favorites":["x",7,null,"y","x"]}"#,
        )
        .unwrap();

        assert_eq!(snapshot.cart.lines().len(), 1);
        assert_eq!(snapshot.cart.qty("e"), 4);
        assert_eq!(snapshot.favorites.to_vec(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_oversized_quantity_is_clamped() {
        let snapshot = decode(r#"{"cart":{"a":99999999999}}"#).unwrap();

        assert_eq!(snapshot.cart.qty("a"), u32::MAX);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let snapshot = decode("{}").unwrap();

        assert_eq!(snapshot, Snapshot::default());
    }
}
