// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the catalog source, the selection state
//! (filter criteria and watchlist), and the two screens. This file keeps
//! policy decisions (source resolution order, window sizing, what happens to
//! a stale fetch result) close to the main update loop so user-facing
//! behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::{CatalogSource, LoadState};
use crate::domain::{FilterCriteria, Watchlist};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    /// Where the catalog is (being) loaded from.
    source: CatalogSource,
    /// Lifecycle of the one startup fetch.
    load_state: LoadState,
    /// Current selection criteria for the library screen.
    criteria: FilterCriteria,
    /// Session watchlist.
    watchlist: Watchlist,
    /// Genre dropdown options, derived once per loaded catalog.
    genres: Vec<String>,
    /// Cards per grid row, from config.
    grid_columns: usize,
    theme_mode: ThemeMode,
    /// Non-fatal startup problem shown in the footer.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("catalog_ready", &self.load_state.catalog().is_some())
            .field("watchlist_len", &self.watchlist.len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            source: CatalogSource::default(),
            load_state: LoadState::default(),
            criteria: FilterCriteria::default(),
            watchlist: Watchlist::new(),
            genres: Vec::new(),
            grid_columns: config::DEFAULT_GRID_COLUMNS,
            theme_mode: ThemeMode::default(),
            startup_warning: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and kicks off the asynchronous catalog
    /// fetch based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        // Source resolution: CLI flag, then config key, then bundled asset.
        let source = flags
            .catalog
            .as_deref()
            .or(config.catalog.source.as_deref())
            .map(CatalogSource::from_arg)
            .unwrap_or_default();

        let app = App {
            source: source.clone(),
            grid_columns: config.grid_columns(),
            theme_mode: config.general.theme_mode,
            startup_warning: config_warning,
            ..Self::default()
        };

        (app, update::fetch_catalog(source))
    }

    fn title(&self) -> String {
        match self.load_state.catalog() {
            Some(catalog) => format!("Muvi - {} movies", catalog.len()),
            None => "Muvi".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            load_state: &self.load_state,
            criteria: &self.criteria,
            genres: &self.genres,
            watchlist: &self.watchlist,
            grid_columns: self.grid_columns,
            warning: self.startup_warning.as_deref(),
        })
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }
}
