// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state. Derived data (the filtered list, the
//! watchlist selection) is recomputed from scratch on every render; there is
//! no cached view state to fall out of sync.

use super::{Message, Screen};
use crate::catalog::LoadState;
use crate::domain::{filter_movies, FilterCriteria, Watchlist};
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::typography;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::{filter_bar, footer, header, movies_grid};
use iced::widget::{container, text, Column};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub load_state: &'a LoadState,
    pub criteria: &'a FilterCriteria,
    pub genres: &'a [String],
    pub watchlist: &'a Watchlist,
    pub grid_columns: usize,
    pub warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(&NavbarViewContext {
        library_active: ctx.screen == Screen::Library,
        watchlist_count: ctx.watchlist.len(),
    })
    .map(Message::Navbar);

    let body: Element<'_, Message> = match ctx.screen {
        Screen::Library => view_library(&ctx),
        Screen::Watchlist => view_watchlist(&ctx),
    };

    Column::new()
        .push(header::view())
        .push(navbar_view)
        .push(
            container(body)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer::view(ctx.warning))
        .into()
}

fn view_library<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let catalog = match ctx.load_state {
        LoadState::Loading => return view_loading(),
        LoadState::Failed(err) => return view_load_failure(&err.to_string()),
        LoadState::Ready(catalog) => catalog,
    };

    let bar = filter_bar::view(filter_bar::ViewContext {
        criteria: ctx.criteria,
        genres: ctx.genres,
    })
    .map(Message::FilterBar);

    let visible = filter_movies(catalog.movies(), ctx.criteria);
    let grid: Element<'a, Message> = if catalog.is_empty() {
        movies_grid::empty_view("The catalog is empty.")
    } else if visible.is_empty() {
        movies_grid::empty_view("No movies match the current filters.")
    } else {
        movies_grid::view(&visible, ctx.watchlist, ctx.grid_columns).map(Message::Card)
    };

    Column::new().push(bar).push(grid).into()
}

fn view_watchlist<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let catalog = match ctx.load_state {
        LoadState::Loading => return view_loading(),
        LoadState::Failed(err) => return view_load_failure(&err.to_string()),
        LoadState::Ready(catalog) => catalog,
    };

    let picked = ctx.watchlist.select_from(catalog.movies());
    if picked.is_empty() {
        movies_grid::empty_view("Your watchlist is empty. Star movies in the library to collect them here.")
    } else {
        movies_grid::view(&picked, ctx.watchlist, ctx.grid_columns).map(Message::Card)
    }
}

fn view_loading<'a>() -> Element<'a, Message> {
    container(
        text("Loading catalog…")
            .size(typography::TITLE_MD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center(Length::Fill)
    .into()
}

fn view_load_failure<'a>(details: &str) -> Element<'a, Message> {
    ErrorDisplay::new(ErrorSeverity::Error)
        .title("Unable to load the catalog")
        .message("The movie catalog could not be fetched. The app stays usable once a catalog arrives.")
        .details(details.to_string())
        .action("Retry", Message::RetryCatalogLoad)
        .view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::error::Error;

    fn ready_state() -> LoadState {
        let catalog = catalog::parse(
            br#"[
                {"id": 1, "title": "Dune", "genre": "Drama", "rating": 9},
                {"id": 2, "title": "Saw", "genre": "Horror", "rating": 6}
            ]"#,
        )
        .expect("valid catalog");
        LoadState::Ready(catalog)
    }

    fn ctx_for<'a>(
        screen: Screen,
        load_state: &'a LoadState,
        criteria: &'a FilterCriteria,
        watchlist: &'a Watchlist,
    ) -> ViewContext<'a> {
        ViewContext {
            screen,
            load_state,
            criteria,
            genres: &[],
            watchlist,
            grid_columns: 3,
            warning: None,
        }
    }

    #[test]
    fn library_renders_when_ready() {
        let state = ready_state();
        let criteria = FilterCriteria::default();
        let watchlist = Watchlist::new();
        let _element = view(ctx_for(Screen::Library, &state, &criteria, &watchlist));
    }

    #[test]
    fn watchlist_renders_when_ready() {
        let state = ready_state();
        let criteria = FilterCriteria::default();
        let watchlist = Watchlist::new().toggled(1.into());
        let _element = view(ctx_for(Screen::Watchlist, &state, &criteria, &watchlist));
    }

    #[test]
    fn loading_and_failure_states_render() {
        let criteria = FilterCriteria::default();
        let watchlist = Watchlist::new();

        let loading = LoadState::Loading;
        let _element = view(ctx_for(Screen::Library, &loading, &criteria, &watchlist));

        let failed = LoadState::Failed(Error::Fetch("HTTP status: 404".to_string()));
        let _element = view(ctx_for(Screen::Library, &failed, &criteria, &watchlist));
    }

    #[test]
    fn warning_line_renders() {
        let state = ready_state();
        let criteria = FilterCriteria::default();
        let watchlist = Watchlist::new();
        let ctx = ViewContext {
            warning: Some("could not read settings.toml"),
            ..ctx_for(Screen::Library, &state, &criteria, &watchlist)
        };
        let _element = view(ctx);
    }
}
