// SPDX-License-Identifier: MPL-2.0
//! Movie selection criteria for the domain layer.
//!
//! This module contains pure filter types without I/O. The visible subset of
//! the catalog is always `filter_movies(catalog, criteria)`: an
//! order-preserving subsequence of the catalog containing exactly the movies
//! that satisfy all three predicates at once.
//!
//! # Available Predicates
//!
//! - [`GenreFilter`]: Filter by genre (exact, case-insensitive)
//! - [`RatingBucket`]: Filter by a coarse rating classification
//! - Title search: case-insensitive substring match
//!
//! All predicates combine with AND logic; there is no OR mode.

use super::movie::Movie;

// =============================================================================
// Genre Filter
// =============================================================================

/// Filter by genre.
///
/// `Named` compares case-insensitively against the movie's genre, so a
/// catalog carrying "horror" still matches a dropdown entry of "Horror".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreFilter {
    /// Show all genres.
    #[default]
    All,
    /// Show only movies of this genre.
    Named(String),
}

impl GenreFilter {
    /// Returns `true` if this filter matches the given genre.
    #[must_use]
    pub fn matches_genre(&self, genre: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(wanted) => wanted.eq_ignore_ascii_case(genre),
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Rating Bucket
// =============================================================================

/// Coarse classification of a movie's numeric rating.
///
/// Bucket boundaries (ratings are on a 0-10 scale):
/// `Good` is 8 and above, `Ok` is 5 inclusive to 8 exclusive, `Bad` is
/// below 5. A movie without a rating fails every bucket except `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingBucket {
    /// Show all movies regardless of rating.
    #[default]
    All,
    /// `rating >= 8`.
    Good,
    /// `5 <= rating < 8`.
    Ok,
    /// `rating < 5`.
    Bad,
}

impl RatingBucket {
    pub const ALL: [RatingBucket; 4] = [
        RatingBucket::All,
        RatingBucket::Good,
        RatingBucket::Ok,
        RatingBucket::Bad,
    ];

    /// Returns `true` if this bucket matches the given rating.
    ///
    /// This is a pure domain check. `None` (missing rating in the source
    /// document) only matches `All`.
    #[must_use]
    pub fn matches_rating(&self, rating: Option<f64>) -> bool {
        match self {
            Self::All => true,
            Self::Good => rating.is_some_and(|r| r >= 8.0),
            Self::Ok => rating.is_some_and(|r| (5.0..8.0).contains(&r)),
            Self::Bad => rating.is_some_and(|r| r < 5.0),
        }
    }

    /// Returns `true` if this bucket is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Parses a bucket label, e.g. from a config file.
    ///
    /// Unknown labels yield `None` so the caller can fall back explicitly
    /// instead of silently widening the selection.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "good" => Some(Self::Good),
            "ok" => Some(Self::Ok),
            "bad" => Some(Self::Bad),
            _ => None,
        }
    }

    /// Display label used by the rating dropdown.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Good => "Good",
            Self::Ok => "Ok",
            Self::Bad => "Bad",
        }
    }
}

impl std::fmt::Display for RatingBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Composite Filter Criteria
// =============================================================================

/// Combined selection criteria with AND logic.
///
/// All active predicates must match for a movie to be included. The default
/// value (empty search, all genres, all ratings) matches every movie.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive title substring. Empty matches everything.
    pub search_term: String,
    /// Genre predicate.
    pub genre: GenreFilter,
    /// Rating bucket predicate.
    pub rating: RatingBucket,
}

impl FilterCriteria {
    /// Creates criteria with no active predicate (matches all movies).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the movie satisfies all three predicates.
    #[must_use]
    pub fn matches(&self, movie: &Movie) -> bool {
        self.genre.matches_genre(&movie.genre)
            && self.rating.matches_rating(movie.rating)
            && self.matches_search(&movie.title)
    }

    fn matches_search(&self, title: &str) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        title
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }

    /// Returns `true` if any predicate is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.genre.is_active() || self.rating.is_active()
    }

    /// Returns the number of active predicates.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.search_term.is_empty() {
            count += 1;
        }
        if self.genre.is_active() {
            count += 1;
        }
        if self.rating.is_active() {
            count += 1;
        }
        count
    }

    /// Resets all predicates to their default (inactive) state.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.genre = GenreFilter::default();
        self.rating = RatingBucket::default();
    }
}

/// Computes the visible subset of `movies` under `criteria`.
///
/// The result is a stable filter: an order-preserving subsequence of the
/// input with no re-sorting and no side effects.
#[must_use]
pub fn filter_movies<'a>(movies: &'a [Movie], criteria: &FilterCriteria) -> Vec<&'a Movie> {
    movies.iter().filter(|m| criteria.matches(m)).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::MovieId;

    fn movie(id: i64, title: &str, genre: &str, rating: Option<f64>) -> Movie {
        Movie {
            id: MovieId::Number(id),
            title: title.to_string(),
            genre: genre.to_string(),
            rating,
        }
    }

    fn sample_catalog() -> Vec<Movie> {
        vec![
            movie(1, "Dune", "Drama", Some(9.0)),
            movie(2, "Saw", "Horror", Some(6.0)),
            movie(3, "Cars", "Action", Some(3.0)),
        ]
    }

    // -------------------------------------------------------------------------
    // GenreFilter tests
    // -------------------------------------------------------------------------

    #[test]
    fn genre_filter_all_matches_everything() {
        let filter = GenreFilter::All;
        assert!(filter.matches_genre("Drama"));
        assert!(filter.matches_genre("anything"));
        assert!(!filter.is_active());
    }

    #[test]
    fn genre_filter_named_is_case_insensitive() {
        let filter = GenreFilter::Named("Horror".to_string());
        assert!(filter.matches_genre("horror"));
        assert!(filter.matches_genre("HORROR"));
        assert!(!filter.matches_genre("Drama"));
        assert!(filter.is_active());
    }

    // -------------------------------------------------------------------------
    // RatingBucket tests
    // -------------------------------------------------------------------------

    #[test]
    fn rating_bucket_all_matches_missing_rating() {
        assert!(RatingBucket::All.matches_rating(None));
        assert!(RatingBucket::All.matches_rating(Some(0.0)));
        assert!(!RatingBucket::All.is_active());
    }

    #[test]
    fn rating_bucket_boundaries() {
        assert!(RatingBucket::Good.matches_rating(Some(8.0)));
        assert!(!RatingBucket::Good.matches_rating(Some(7.9)));

        assert!(RatingBucket::Ok.matches_rating(Some(5.0)));
        assert!(RatingBucket::Ok.matches_rating(Some(7.9)));
        assert!(!RatingBucket::Ok.matches_rating(Some(8.0)));
        assert!(!RatingBucket::Ok.matches_rating(Some(4.9)));

        assert!(RatingBucket::Bad.matches_rating(Some(4.9)));
        assert!(!RatingBucket::Bad.matches_rating(Some(5.0)));
    }

    #[test]
    fn missing_rating_fails_every_active_bucket() {
        assert!(!RatingBucket::Good.matches_rating(None));
        assert!(!RatingBucket::Ok.matches_rating(None));
        assert!(!RatingBucket::Bad.matches_rating(None));
    }

    #[test]
    fn rating_bucket_parse_round_trips_labels() {
        for bucket in RatingBucket::ALL {
            assert_eq!(RatingBucket::parse(bucket.label()), Some(bucket));
        }
        assert_eq!(RatingBucket::parse("GOOD"), Some(RatingBucket::Good));
        assert_eq!(RatingBucket::parse("mediocre"), None);
    }

    // -------------------------------------------------------------------------
    // FilterCriteria (composite) tests
    // -------------------------------------------------------------------------

    #[test]
    fn default_criteria_is_inactive_and_matches_all() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.is_active());
        assert_eq!(criteria.active_count(), 0);

        let movies = sample_catalog();
        let visible = filter_movies(&movies, &criteria);
        assert_eq!(visible.len(), movies.len());
    }

    #[test]
    fn default_criteria_returns_catalog_in_order() {
        let movies = sample_catalog();
        let visible = filter_movies(&movies, &FilterCriteria::default());
        let titles: Vec<&str> = visible.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Saw", "Cars"]);
    }

    #[test]
    fn good_bucket_selects_dune_only() {
        let movies = sample_catalog();
        let criteria = FilterCriteria {
            rating: RatingBucket::Good,
            ..FilterCriteria::default()
        };

        let visible = filter_movies(&movies, &criteria);
        let titles: Vec<&str> = visible.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let movies = sample_catalog();
        let criteria = FilterCriteria {
            search_term: "a".to_string(),
            ..FilterCriteria::default()
        };

        // "Dune" has no 'a'; "Saw" and "Cars" both do.
        let visible = filter_movies(&movies, &criteria);
        let titles: Vec<&str> = visible.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Saw", "Cars"]);
    }

    #[test]
    fn search_matches_uppercase_needle() {
        let movies = sample_catalog();
        let criteria = FilterCriteria {
            search_term: "DUNE".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_movies(&movies, &criteria).len(), 1);
    }

    #[test]
    fn predicates_combine_with_and() {
        let movies = sample_catalog();
        let criteria = FilterCriteria {
            search_term: "a".to_string(),
            genre: GenreFilter::Named("Horror".to_string()),
            rating: RatingBucket::Ok,
        };

        let visible = filter_movies(&movies, &criteria);
        let titles: Vec<&str> = visible.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Saw"]);

        // Same genre but a bucket that excludes it: empty intersection.
        let criteria = FilterCriteria {
            rating: RatingBucket::Good,
            ..criteria
        };
        assert!(filter_movies(&movies, &criteria).is_empty());
    }

    #[test]
    fn filtered_result_is_subsequence_of_catalog() {
        let movies = sample_catalog();
        let criteria = FilterCriteria {
            search_term: "a".to_string(),
            ..FilterCriteria::default()
        };

        let visible = filter_movies(&movies, &criteria);
        let mut catalog_positions = visible.iter().map(|picked| {
            movies
                .iter()
                .position(|m| m.id == picked.id)
                .expect("every result comes from the catalog")
        });
        let mut last = None;
        assert!(catalog_positions.all(|pos| {
            let increasing = last.map_or(true, |prev| pos > prev);
            last = Some(pos);
            increasing
        }));
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let visible = filter_movies(&[], &FilterCriteria::default());
        assert!(visible.is_empty());
    }

    #[test]
    fn active_count_tracks_each_predicate() {
        let mut criteria = FilterCriteria {
            search_term: "dune".to_string(),
            genre: GenreFilter::Named("Drama".to_string()),
            rating: RatingBucket::Good,
        };
        assert!(criteria.is_active());
        assert_eq!(criteria.active_count(), 3);

        criteria.clear();
        assert!(!criteria.is_active());
        assert_eq!(criteria.active_count(), 0);
    }
}
