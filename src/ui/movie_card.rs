// SPDX-License-Identifier: MPL-2.0
//! A single movie card: title, genre, rating badge, watchlist star.

use crate::domain::{Movie, MovieId, RatingBucket};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Row, Text};
use iced::{alignment::Vertical, Border, Color, Element, Length, Theme};

/// Messages emitted by a card.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The star button was pressed.
    ToggleWatchlist(MovieId),
}

/// Render one card.
///
/// `watchlisted` drives the star state; the card itself holds no state and
/// reports the toggle upwards by id.
pub fn view(movie: &Movie, watchlisted: bool) -> Element<'_, Message> {
    let title = text(movie.title.as_str()).size(typography::TITLE_SM);

    let genre = text(movie.genre.as_str())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    let star_label = if watchlisted { "★" } else { "☆" };
    let star = button(Text::new(star_label).size(typography::TITLE_SM))
        .on_press(Message::ToggleWatchlist(movie.id.clone()))
        .padding(spacing::XXS)
        .style(move |theme: &Theme, status| star_style(theme, status, watchlisted));

    let top_row = Row::new()
        .align_y(Vertical::Center)
        .push(container(title).width(Length::Fill))
        .push(star);

    let column = Column::new()
        .spacing(spacing::XS)
        .push(top_row)
        .push(genre)
        .push(rating_badge(movie.rating));

    container(column)
        .width(sizing::CARD_WIDTH)
        .padding(spacing::SM)
        .style(card_style)
        .into()
}

/// Badge showing the numeric rating tinted by its bucket, or a neutral
/// "Unrated" chip when the source had no rating.
fn rating_badge<'a>(rating: Option<f64>) -> Element<'a, Message> {
    let (label, color) = match rating {
        Some(value) => (format!("{:.1}", value), bucket_color(rating)),
        None => ("Unrated".to_string(), palette::GRAY_400),
    };

    let badge = container(
        text(label)
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style { color: Some(color) }),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(move |_theme: &Theme| container::Style {
        border: Border {
            radius: radius::FULL.into(),
            width: 1.0,
            color,
        },
        ..Default::default()
    });

    Row::new()
        .height(sizing::BADGE_HEIGHT)
        .align_y(Vertical::Center)
        .push(badge)
        .into()
}

/// Color of the badge: the first active bucket the rating falls into.
fn bucket_color(rating: Option<f64>) -> Color {
    if RatingBucket::Good.matches_rating(rating) {
        palette::RATING_GOOD
    } else if RatingBucket::Ok.matches_rating(rating) {
        palette::RATING_OK
    } else {
        palette::RATING_BAD
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

fn star_style(theme: &Theme, status: button::Status, watchlisted: bool) -> button::Style {
    let base_palette = theme.extended_palette();
    let text_color = if watchlisted {
        palette::STAR_ACTIVE
    } else {
        match status {
            button::Status::Hovered => palette::STAR_ACTIVE,
            _ => base_palette.background.weak.text,
        }
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(rating: Option<f64>) -> Movie {
        Movie {
            id: MovieId::Number(1),
            title: "Dune".to_string(),
            genre: "Drama".to_string(),
            rating,
        }
    }

    #[test]
    fn bucket_color_follows_rating_buckets() {
        assert_eq!(bucket_color(Some(9.0)), palette::RATING_GOOD);
        assert_eq!(bucket_color(Some(6.0)), palette::RATING_OK);
        assert_eq!(bucket_color(Some(2.0)), palette::RATING_BAD);
    }

    #[test]
    fn card_view_renders_rated_and_unrated() {
        let rated = movie(Some(7.2));
        let _element = view(&rated, false);

        let unrated = movie(None);
        let _element = view(&unrated, true);
    }
}
