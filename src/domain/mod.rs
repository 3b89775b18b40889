// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO I/O.
//!
//! This module contains pure domain types and the selection rules that drive
//! the visible movie list. It has no dependencies on the UI or on how the
//! catalog is sourced, to ensure testability and architectural purity.
//!
//! # Modules
//!
//! - [`movie`]: Catalog records ([`Movie`](movie::Movie), [`MovieId`](movie::MovieId),
//!   [`Catalog`](movie::Catalog))
//! - [`filter`]: Selection criteria ([`FilterCriteria`](filter::FilterCriteria),
//!   [`RatingBucket`](filter::RatingBucket), [`GenreFilter`](filter::GenreFilter))
//! - [`watchlist`]: Session watchlist ([`Watchlist`](watchlist::Watchlist))

pub mod filter;
pub mod movie;
pub mod watchlist;

pub use filter::{filter_movies, FilterCriteria, GenreFilter, RatingBucket};
pub use movie::{Catalog, Movie, MovieId};
pub use watchlist::Watchlist;
