// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! Displays errors, warnings, and info messages with a title, a
//! user-friendly message, optional technical details, and an optional action
//! button (e.g. "Retry").
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title("Unable to load the catalog")
//!     .message("The catalog could not be fetched.")
//!     .details("HTTP status: 404")
//!     .action("Retry", Message::RetryCatalogLoad)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{button, container, text, Column};
use iced::{alignment::Horizontal, Border, Color, Element, Length, Theme};

/// Severity level determines the color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Critical error - prevents operation (red)
    #[default]
    Error,
    /// Warning - operation degraded but possible (orange)
    Warning,
    /// Informational - no action required (blue)
    Info,
}

impl ErrorSeverity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
            ErrorSeverity::Info => palette::INFO_500,
        }
    }
}

/// Configuration for the `ErrorDisplay` component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            details: None,
            action_label: None,
            action_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    /// Creates a new error display with the given severity.
    #[must_use]
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title (main heading).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details line.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Adds an action button.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Builds the element.
    pub fn view<'a>(self) -> Element<'a, Message> {
        let accent = self.severity.color();
        let mut column = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .max_width(480.0);

        if let Some(title) = self.title {
            column = column.push(
                text(title)
                    .size(typography::TITLE_MD)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );
        }

        if let Some(message) = self.message {
            column = column.push(text(message).size(typography::BODY));
        }

        if let Some(details) = self.details {
            column = column.push(
                text(details)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.weak.text),
                    }),
            );
        }

        if let (Some(label), Some(message)) = (self.action_label, self.action_message) {
            column = column.push(
                button(text(label).size(typography::BODY))
                    .on_press(message)
                    .padding([spacing::XS, spacing::MD]),
            );
        }

        let panel = container(column)
            .padding(spacing::LG)
            .style(move |theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                border: Border {
                    radius: radius::MD.into(),
                    width: 1.0,
                    color: accent,
                },
                ..Default::default()
            });

        container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_differ() {
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Info.color());
        assert_ne!(ErrorSeverity::Warning.color(), ErrorSeverity::Info.color());
    }

    #[test]
    fn full_panel_renders() {
        let _element: Element<'_, ()> = ErrorDisplay::new(ErrorSeverity::Error)
            .title("Unable to load the catalog")
            .message("The catalog could not be fetched.")
            .details("HTTP status: 404")
            .action("Retry", ())
            .view();
    }

    #[test]
    fn bare_panel_renders() {
        let _element: Element<'_, ()> = ErrorDisplay::new(ErrorSeverity::Info).view();
    }
}
