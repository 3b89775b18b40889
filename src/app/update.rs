// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state transitions are whole-value replacements driven by the single
//! Iced event queue: filter edits replace criteria fields, a watchlist
//! toggle replaces the watchlist, and a completed fetch replaces the load
//! state atomically. Nothing here blocks; the catalog fetch is the only
//! asynchronous task.

use super::{App, Message, Screen};
use crate::catalog::{self, CatalogSource, LoadState};
use crate::domain::Catalog;
use crate::error::Error;
use crate::ui::filter_bar;
use crate::ui::movie_card;
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::Task;

/// Main update entrypoint, called by `App::update`.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => {
            app.screen = match navbar::update(msg) {
                NavbarEvent::ShowLibrary => Screen::Library,
                NavbarEvent::ShowWatchlist => Screen::Watchlist,
            };
            Task::none()
        }
        Message::FilterBar(msg) => {
            filter_bar::update(msg, &mut app.criteria);
            Task::none()
        }
        Message::Card(movie_card::Message::ToggleWatchlist(id)) => {
            app.watchlist = app.watchlist.toggled(id);
            Task::none()
        }
        Message::CatalogLoaded { source, result } => {
            handle_catalog_loaded(app, source, result);
            Task::none()
        }
        Message::RetryCatalogLoad => {
            app.load_state = LoadState::Loading;
            fetch_catalog(app.source.clone())
        }
    }
}

/// Dispatches the catalog fetch as a background task.
pub fn fetch_catalog(source: CatalogSource) -> Task<Message> {
    Task::perform(catalog::load(source.clone()), move |result| {
        Message::CatalogLoaded {
            source: source.clone(),
            result,
        }
    })
}

/// Applies a completed fetch.
///
/// A result for a source other than the current one is a leftover from a
/// superseded fetch and is discarded; the session only ever observes whole
/// catalogs from its current source.
fn handle_catalog_loaded(app: &mut App, source: CatalogSource, result: Result<Catalog, Error>) {
    if source != app.source {
        return;
    }

    match result {
        Ok(loaded) => {
            app.genres = loaded.genres();
            app.load_state = LoadState::Ready(loaded);
        }
        Err(err) => {
            eprintln!("catalog load failed ({}): {}", source, err);
            app.load_state = LoadState::Failed(err);
        }
    }
}
