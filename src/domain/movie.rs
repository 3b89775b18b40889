// SPDX-License-Identifier: MPL-2.0
//! Catalog record types.
//!
//! These are pure value types deserialized from the catalog source. They are
//! created once when the catalog loads and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a movie, stable for the session.
///
/// Catalog files are allowed to carry ids either as JSON numbers or as
/// strings, so both representations are accepted verbatim. `1` and `"1"` are
/// distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{}", n),
            MovieId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for MovieId {
    fn from(n: i64) -> Self {
        MovieId::Number(n)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        MovieId::Text(s.to_string())
    }
}

/// A single catalog record.
///
/// `rating` is optional: source files occasionally omit it, and an absent
/// rating fails every bucket except [`RatingBucket::All`](crate::domain::RatingBucket::All).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// The full ordered collection of movies loaded from the catalog source.
///
/// Insertion order equals source order and is preserved by every selection
/// operation. Invariant: ids are unique within the catalog (enforced by
/// [`Catalog::from_movies`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Builds a catalog from source-ordered records.
    ///
    /// Returns the first duplicated id as an error so the loader can reject
    /// the document instead of letting an ambiguous id into the session.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self, MovieId> {
        let mut seen = std::collections::HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(&movie.id) {
                return Err(movie.id.clone());
            }
        }
        Ok(Self { movies })
    }

    /// The records in source order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Distinct genres in first-appearance order, for the genre dropdown.
    ///
    /// Comparison is case-insensitive ("Drama" and "drama" are one entry);
    /// the first spelling seen wins.
    #[must_use]
    pub fn genres(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut genres = Vec::new();
        for movie in &self.movies {
            if seen.insert(movie.genre.to_lowercase()) {
                genres.push(movie.genre.clone());
            }
        }
        genres
    }
}
