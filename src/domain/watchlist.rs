// SPDX-License-Identifier: MPL-2.0
//! Session watchlist.
//!
//! The watchlist is a set of movie ids treated as an immutable value:
//! [`Watchlist::toggled`] returns a new set rather than mutating in place, so
//! the update loop can replace state wholesale the same way it replaces the
//! filter criteria.

use super::movie::{Movie, MovieId};
use std::collections::HashSet;

/// User-curated set of movie ids marked for later viewing.
///
/// Created empty at session start; never persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Watchlist {
    ids: HashSet<MovieId>,
}

impl Watchlist {
    /// Creates an empty watchlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new watchlist with `id` removed if present, added if absent.
    ///
    /// Toggling twice restores the original set. Ids that do not occur in the
    /// catalog are accepted; they simply never show up on the watchlist
    /// screen.
    #[must_use]
    pub fn toggled(&self, id: MovieId) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Self { ids }
    }

    /// Pure membership test, drives the star state on each card.
    #[must_use]
    pub fn contains(&self, id: &MovieId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selects the watchlisted subsequence of `movies`, in catalog order.
    ///
    /// This is the watchlist screen's selection rule: membership only, the
    /// filter criteria do not apply here.
    #[must_use]
    pub fn select_from<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        movies.iter().filter(|m| self.contains(&m.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id: MovieId::Number(id),
            title: title.to_string(),
            genre: "Drama".to_string(),
            rating: Some(7.0),
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let empty = Watchlist::new();
        assert!(empty.is_empty());

        let one = empty.toggled(2.into());
        assert!(one.contains(&2.into()));
        assert_eq!(one.len(), 1);

        let back = one.toggled(2.into());
        assert_eq!(back, empty);
    }

    #[test]
    fn toggle_returns_new_value_without_touching_original() {
        let original = Watchlist::new().toggled(1.into());
        let updated = original.toggled(2.into());

        assert_eq!(original.len(), 1);
        assert_eq!(updated.len(), 2);
        assert!(!original.contains(&2.into()));
    }

    #[test]
    fn double_toggle_is_idempotent_as_a_set() {
        let watchlist = Watchlist::new().toggled(1.into()).toggled("x".into());
        let cycled = watchlist.toggled(9.into()).toggled(9.into());
        assert_eq!(cycled, watchlist);
    }

    #[test]
    fn toggling_unknown_id_is_harmless() {
        let movies = vec![movie(1, "Dune")];
        let watchlist = Watchlist::new().toggled(42.into());

        assert!(watchlist.contains(&42.into()));
        assert!(watchlist.select_from(&movies).is_empty());
    }

    #[test]
    fn select_from_preserves_catalog_order() {
        let movies = vec![movie(1, "Dune"), movie(2, "Saw"), movie(3, "Cars")];

        // Toggle in reverse order; selection still follows the catalog.
        let watchlist = Watchlist::new().toggled(3.into()).toggled(1.into());
        let picked: Vec<&str> = watchlist
            .select_from(&movies)
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(picked, vec!["Dune", "Cars"]);
    }

    #[test]
    fn watchlist_screen_example_from_catalog() {
        let movies = vec![movie(1, "Dune"), movie(2, "Saw"), movie(3, "Cars")];
        let watchlist = Watchlist::new().toggled(2.into());

        let picked: Vec<&str> = watchlist
            .select_from(&movies)
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(picked, vec!["Saw"]);
    }
}
