//! # Favorites
//!
//! Membership-only set of product ids. Persisted as a list; the order of that
//! list carries no meaning, so the set is kept sorted for stable output.

use std::collections::BTreeSet;

use serde::Serialize;

/// Set of favorite product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Favorites::default()
    }

    /// Flips membership of `id`.
    ///
    /// ## Returns
    /// `true` if `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Owned, sorted list of ids.
    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Favorites {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle("a"));
        assert!(favorites.contains("a"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("a"));
        assert!(!favorites.contains("a"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut favorites: Favorites = ["x", "y"].into_iter().collect();
        let before = favorites.clone();

        favorites.toggle("y");
        favorites.toggle("y");
        assert_eq!(favorites, before);

        favorites.toggle("z");
        favorites.toggle("z");
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_duplicates_collapse() {
        let favorites: Favorites = ["b", "a", "b"].into_iter().collect();

        assert_eq!(favorites.to_vec(), vec!["a".to_string(), "b".to_string()]);
    }
}
