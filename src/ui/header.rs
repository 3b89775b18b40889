// SPDX-License-Identifier: MPL-2.0
//! Application header: wordmark and tagline shown above the navbar.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{container, text, Column};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Render the header. Purely presentational, emits no messages.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let wordmark = text("MUVI")
        .size(typography::TITLE_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().primary.strong.color),
        });

    let tagline = text("Find your next movie here!").size(typography::BODY).style(
        |theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        },
    );

    let column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(wordmark)
        .push(tagline);

    container(column)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::MD, spacing::MD])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_view_renders() {
        let _element: Element<'_, ()> = view();
    }
}
