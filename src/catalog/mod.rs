// SPDX-License-Identifier: MPL-2.0
//! Catalog source: where movies come from and how they are loaded.
//!
//! The catalog is fetched once at startup (fire-and-forget, no retry policy,
//! no timeout beyond the HTTP client's defaults) and replaces the application
//! state atomically when it arrives. While the fetch is in flight the UI
//! renders [`LoadState::Loading`]; a failure surfaces as
//! [`LoadState::Failed`] with a Retry affordance rather than being silently
//! swallowed.

use crate::domain::{Catalog, Movie};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::path::PathBuf;

/// Default catalog document shipped inside the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "movies.json"]
struct Asset;

/// Name of the bundled catalog document.
const BUNDLED_CATALOG: &str = "movies.json";

// =============================================================================
// Source
// =============================================================================

/// Where the catalog is read from.
///
/// Resolution order at startup: `--catalog` CLI flag, then the
/// `[catalog] source` config key, then the bundled asset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The `movies.json` embedded at build time.
    #[default]
    Bundled,
    /// A JSON document on the local filesystem.
    File(PathBuf),
    /// A JSON document fetched with a single unauthenticated GET.
    Url(String),
}

impl CatalogSource {
    /// Classifies a CLI or config value as URL or file path.
    #[must_use]
    pub fn from_arg(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            Self::Url(spec.to_string())
        } else {
            Self::File(PathBuf::from(spec))
        }
    }

    /// Human-readable origin for error panels.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Bundled => format!("bundled {}", BUNDLED_CATALOG),
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

// =============================================================================
// Load state
// =============================================================================

/// Lifecycle of the one startup fetch, as observed by the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Fetch dispatched, nothing arrived yet.
    #[default]
    Loading,
    /// Catalog replaced atomically with the fetched document.
    Ready(Catalog),
    /// Fetch or parse failed; the error is shown, not swallowed.
    Failed(Error),
}

impl LoadState {
    /// The catalog, if one is loaded.
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Loads and parses the catalog from `source`.
///
/// This is the only asynchronous operation in the application. Errors map to
/// [`Error::Io`]/[`Error::Fetch`] for transport problems and
/// [`Error::Parse`] for document problems (non-array JSON, wrong field
/// types, duplicate ids).
pub async fn load(source: CatalogSource) -> Result<Catalog> {
    let bytes = match &source {
        CatalogSource::Bundled => bundled_bytes()?,
        CatalogSource::File(path) => tokio::fs::read(path).await?,
        CatalogSource::Url(url) => fetch_bytes(url).await?,
    };
    parse(&bytes)
}

fn bundled_bytes() -> Result<Vec<u8>> {
    Asset::get(BUNDLED_CATALOG)
        .map(|file| file.data.into_owned())
        .ok_or_else(|| Error::Io(format!("missing embedded asset: {}", BUNDLED_CATALOG)))
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("Muvi/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Parses a JSON array of movie objects into a [`Catalog`].
pub fn parse(bytes: &[u8]) -> Result<Catalog> {
    let movies: Vec<Movie> = serde_json::from_slice(bytes)?;
    Catalog::from_movies(movies)
        .map_err(|id| Error::Parse(format!("duplicate movie id in catalog: {}", id)))
}

// =============================================================================
// Tests
// =============================================================================
