// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode handling.

use serde::{Deserialize, Serialize};

/// Theme preference as stored in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the preference to a concrete Iced theme.
    ///
    /// `System` queries the desktop environment; detection failures fall back
    /// to dark, matching the default look of the card grid.
    #[must_use]
    pub fn to_iced_theme(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
            ThemeMode::System => {
                if let Ok(dark_light::Mode::Light) = dark_light::detect() {
                    iced::Theme::Light
                } else {
                    iced::Theme::Dark
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn explicit_modes_map_directly() {
        assert!(matches!(
            ThemeMode::Light.to_iced_theme(),
            iced::Theme::Light
        ));
        assert!(matches!(ThemeMode::Dark.to_iced_theme(), iced::Theme::Dark));
    }

    #[test]
    fn serde_uses_lowercase_labels() {
        let toml = toml::to_string(&SerdeProbe {
            theme_mode: ThemeMode::Dark,
        })
        .expect("serializes");
        assert!(toml.contains("theme_mode = \"dark\""));
    }

    #[derive(Serialize)]
    struct SerdeProbe {
        theme_mode: ThemeMode,
    }
}
