// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the page widgets on top of the Iced theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub page_background: Color,
    pub card_background: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub brand: Color,
    pub error: Color,
    pub warning: Color,
    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::GRAY_100,
            card_background: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
            text_primary: palette::SPACE_900,
            text_secondary: palette::GRAY_700,
            brand: palette::PRIMARY_500,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::SPACE_900,
            card_background: Color {
                a: opacity::SURFACE,
                ..palette::SPACE_800
            },
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            brand: palette::PRIMARY_400,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Space imagery reads best on dark, so detection errors fall back to it.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_page() {
        assert!(ColorScheme::light().page_background.r > 0.8);
    }

    #[test]
    fn dark_scheme_has_dark_page() {
        assert!(ColorScheme::dark().page_background.r < 0.1);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert_eq!(ColorScheme::for_mode(ThemeMode::Dark), ColorScheme::dark());
        // System mode depends on the desktop, so only check it does not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"dark\"").expect("valid toml");
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
