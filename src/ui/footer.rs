// SPDX-License-Identifier: MPL-2.0
//! Application footer: copyright line, plus the config warning if one was
//! raised at startup.

use crate::ui::design_tokens::{palette, spacing, typography};
use chrono::Datelike;
use iced::widget::{container, text, Column};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Render the footer.
///
/// `warning` carries a non-fatal startup problem (e.g. an unreadable config
/// file) that should stay visible without blocking the catalog.
pub fn view<'a, Message: 'a>(warning: Option<&'a str>) -> Element<'a, Message> {
    let current_year = chrono::Local::now().year();
    let copyright = text(format!("© {} Muvi. All rights reserved.", current_year))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(copyright);

    if let Some(message) = warning {
        column = column.push(
            text(message)
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WARNING_500),
                }),
        );
    }

    container(column)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_view_renders() {
        let _element: Element<'_, ()> = view(None);
    }

    #[test]
    fn footer_view_renders_with_warning() {
        let _element: Element<'_, ()> = view(Some("could not read settings.toml"));
    }
}
