// SPDX-License-Identifier: MPL-2.0
//! Filter bar for the library screen.
//!
//! Renders the search input and the genre/rating dropdowns, and translates
//! widget messages into edits of the [`FilterCriteria`] owned by the parent.
//! The bar holds no state of its own; every change is a whole-value
//! replacement of a criteria field, and the visible list is re-derived from
//! scratch on the next render.

use crate::app::config::defaults::{ALL_GENRES_LABEL, SEARCH_PLACEHOLDER};
use crate::domain::{FilterCriteria, GenreFilter, RatingBucket};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{pick_list, text_input, Row};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the filter bar.
pub struct ViewContext<'a> {
    /// Current criteria (provides the widget values).
    pub criteria: &'a FilterCriteria,
    /// Genres present in the loaded catalog, first-appearance order.
    pub genres: &'a [String],
}

/// Messages emitted by the filter bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The search input changed (fired on every keystroke).
    SearchChanged(String),
    /// A genre was picked from the dropdown.
    GenreSelected(String),
    /// A rating bucket was picked from the dropdown.
    RatingSelected(RatingBucket),
}

/// Apply a filter bar message to the criteria.
pub fn update(message: Message, criteria: &mut FilterCriteria) {
    match message {
        Message::SearchChanged(term) => {
            criteria.search_term = term;
        }
        Message::GenreSelected(label) => {
            criteria.genre = if label == ALL_GENRES_LABEL {
                GenreFilter::All
            } else {
                GenreFilter::Named(label)
            };
        }
        Message::RatingSelected(bucket) => {
            criteria.rating = bucket;
        }
    }
}

/// Render the filter bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let search = text_input(SEARCH_PLACEHOLDER, &ctx.criteria.search_term)
        .on_input(Message::SearchChanged)
        .width(sizing::SEARCH_WIDTH)
        .padding(spacing::XS);

    let genre_options = genre_options(ctx.genres);
    let selected_genre = match &ctx.criteria.genre {
        GenreFilter::All => ALL_GENRES_LABEL.to_string(),
        GenreFilter::Named(name) => name.clone(),
    };
    let genres = pick_list(genre_options, Some(selected_genre), Message::GenreSelected);

    let ratings = pick_list(
        RatingBucket::ALL,
        Some(ctx.criteria.rating),
        Message::RatingSelected,
    );

    Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .push(search)
        .push(genres)
        .push(ratings)
        .into()
}

/// Dropdown entries: "All Genre" first, then the catalog's genres.
fn genre_options(genres: &[String]) -> Vec<String> {
    let mut options = Vec::with_capacity(genres.len() + 1);
    options.push(ALL_GENRES_LABEL.to_string());
    options.extend(genres.iter().cloned());
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_change_replaces_term() {
        let mut criteria = FilterCriteria::default();
        update(Message::SearchChanged("dune".to_string()), &mut criteria);
        assert_eq!(criteria.search_term, "dune");

        update(Message::SearchChanged(String::new()), &mut criteria);
        assert!(!criteria.is_active());
    }

    #[test]
    fn selecting_all_genre_label_clears_genre_filter() {
        let mut criteria = FilterCriteria {
            genre: GenreFilter::Named("Horror".to_string()),
            ..FilterCriteria::default()
        };

        update(Message::GenreSelected(ALL_GENRES_LABEL.to_string()), &mut criteria);
        assert_eq!(criteria.genre, GenreFilter::All);
    }

    #[test]
    fn selecting_named_genre_activates_filter() {
        let mut criteria = FilterCriteria::default();
        update(Message::GenreSelected("Drama".to_string()), &mut criteria);
        assert_eq!(criteria.genre, GenreFilter::Named("Drama".to_string()));
    }

    #[test]
    fn selecting_rating_bucket_replaces_bucket() {
        let mut criteria = FilterCriteria::default();
        update(Message::RatingSelected(RatingBucket::Good), &mut criteria);
        assert_eq!(criteria.rating, RatingBucket::Good);
    }

    #[test]
    fn genre_options_lead_with_all_genre() {
        let genres = vec!["Drama".to_string(), "Horror".to_string()];
        let options = genre_options(&genres);
        assert_eq!(options[0], ALL_GENRES_LABEL);
        assert_eq!(&options[1..], &genres[..]);
    }

    #[test]
    fn filter_bar_view_renders() {
        let criteria = FilterCriteria::default();
        let genres = vec!["Drama".to_string()];
        let ctx = ViewContext {
            criteria: &criteria,
            genres: &genres,
        };
        let _element = view(ctx);
    }
}
