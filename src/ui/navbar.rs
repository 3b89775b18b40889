// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for switching between the two screens.
//!
//! The navbar renders a Library tab and a Watchlist tab (with a count badge)
//! and reports the selection to the parent as an [`Event`]; the parent owns
//! the active screen.

use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{button, text, Row, Text};
use iced::{alignment::Vertical, Border, Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    /// Whether the Library screen is active (otherwise: Watchlist).
    pub library_active: bool,
    /// Number of watchlisted movies, shown on the Watchlist tab.
    pub watchlist_count: usize,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectLibrary,
    SelectWatchlist,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ShowLibrary,
    ShowWatchlist,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SelectLibrary => Event::ShowLibrary,
        Message::SelectWatchlist => Event::ShowWatchlist,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let library_tab = tab("Library", ctx.library_active, Message::SelectLibrary);

    let watchlist_label = if ctx.watchlist_count > 0 {
        format!("Watchlist ({})", ctx.watchlist_count)
    } else {
        "Watchlist".to_string()
    };
    let watchlist_tab = tab(watchlist_label, !ctx.library_active, Message::SelectWatchlist);

    Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .push(library_tab)
        .push(watchlist_tab)
        .into()
}

/// Build one tab button, highlighted when active.
fn tab<'a>(label: impl text::IntoFragment<'a>, active: bool, message: Message) -> Element<'a, Message> {
    let content = Text::new(label).size(typography::BODY);
    let styled = if active {
        button(content).style(active_tab_style)
    } else {
        button(content).style(inactive_tab_style)
    };

    styled
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .into()
}

fn active_tab_style(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    button::Style {
        background: Some(palette.primary.strong.color.into()),
        text_color: palette.primary.strong.text,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn inactive_tab_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.strong.color.into())
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
