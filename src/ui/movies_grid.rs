// SPDX-License-Identifier: MPL-2.0
//! Scrollable card grid shared by the library and watchlist screens.

use crate::domain::{Movie, Watchlist};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::movie_card;
use iced::widget::{container, scrollable, text, Column, Row};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Render `movies` as rows of cards, `columns` per row.
///
/// `movies` is an already-selected subsequence of the catalog (filtered or
/// watchlist-only); the grid renders it verbatim and keeps its order.
pub fn view<'a>(
    movies: &[&'a Movie],
    watchlist: &Watchlist,
    columns: usize,
) -> Element<'a, movie_card::Message> {
    let columns = columns.max(1);

    let mut grid = Column::new().spacing(spacing::MD);
    for chunk in movies.chunks(columns) {
        let mut row = Row::new().spacing(spacing::MD);
        for &movie in chunk {
            row = row.push(movie_card::view(movie, watchlist.contains(&movie.id)));
        }
        grid = grid.push(row);
    }

    let centered = container(grid)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::MD, spacing::MD]);

    scrollable(centered)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Placeholder shown instead of the grid when the selection is empty.
pub fn empty_view<'a, Message: 'a>(hint: &'a str) -> Element<'a, Message> {
    container(
        text(hint)
            .size(typography::TITLE_MD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            })
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center(Length::Fill)
    .into()
}
