// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The full catalog with the filter bar.
    #[default]
    Library,
    /// Only the watchlisted movies, in catalog order.
    Watchlist,
}
