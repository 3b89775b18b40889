// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::CatalogSource;
use crate::domain::Catalog;
use crate::error::Error;
use crate::ui::filter_bar;
use crate::ui::movie_card;
use crate::ui::navbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    FilterBar(filter_bar::Message),
    Card(movie_card::Message),
    /// The startup (or retried) catalog fetch completed.
    ///
    /// Carries the source the fetch was started for so the update loop can
    /// discard results that no longer match the current source.
    CatalogLoaded {
        source: CatalogSource,
        result: Result<Catalog, Error>,
    },
    /// Re-dispatch the catalog fetch after a failure.
    RetryCatalogLoad,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional catalog path or URL overriding config and the bundled asset.
    pub catalog: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `MUVI_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
