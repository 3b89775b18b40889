// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! The two screens (library and watchlist) are composed in
//! [`crate::app::view`] from the pieces here:
//!
//! - [`header`] - Wordmark and tagline
//! - [`navbar`] - Library / Watchlist tabs
//! - [`filter_bar`] - Search input and genre/rating dropdowns
//! - [`movie_card`] / [`movies_grid`] - Card rendering
//! - [`footer`] - Copyright line and startup warnings
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod movie_card;
pub mod movies_grid;
pub mod navbar;
pub mod theming;
