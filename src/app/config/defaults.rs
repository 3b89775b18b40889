// SPDX-License-Identifier: MPL-2.0
//! Default values shared between the config module and the UI.

/// Number of cards per grid row.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Bounds for the `grid_columns` setting.
pub const MIN_GRID_COLUMNS: usize = 1;
pub const MAX_GRID_COLUMNS: usize = 6;

/// Placeholder shown in the search input.
pub const SEARCH_PLACEHOLDER: &str = "Enter movie name...";

/// Label of the genre dropdown entry that disables genre filtering.
pub const ALL_GENRES_LABEL: &str = "All Genre";
