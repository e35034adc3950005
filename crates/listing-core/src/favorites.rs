//! Favorite Set
//!
//! Session-local listing ids the user has hearted. Membership is all that
//! matters; iteration is in id order.

use std::collections::BTreeSet;

use crate::domain::ListingId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: BTreeSet<ListingId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    /// Returns whether the id is a favorite afterwards.
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.toggle("a"));
        assert!(favorites.contains("a"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("a"));
        assert!(!favorites.contains("a"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle("a");
        favorites.toggle("b");
        let before = favorites.clone();
        let before_ids: Vec<String> = before.iter().map(str::to_string).collect();

        for id in ["a", "b", "c"] {
            favorites.toggle(id);
            favorites.toggle(id);
            assert_eq!(favorites, before);
            assert_eq!(favorites.iter().collect::<Vec<_>>(), before_ids);
        }
    }

    #[test]
    fn test_iteration_ignores_toggle_history() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle("c");
        favorites.toggle("a");
        favorites.toggle("b");
        favorites.toggle("a");
        favorites.toggle("a");
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
