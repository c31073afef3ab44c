// SPDX-License-Identifier: MPL-2.0
//! Theme selection and the studio color scheme.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the custom widget styles.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub page_background: Color,
    pub surface: Color,
    pub surface_raised: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub accent: Color,
    pub accent_strong: Color,
    pub on_accent: Color,

    /// Wireframe stroke inside the viewers.
    pub wireframe: Color,

    pub error: Color,
    pub success: Color,
    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::INK_950,
            surface: palette::INK_900,
            surface_raised: palette::INK_800,

            text_primary: palette::PAPER_50,
            text_secondary: palette::GRAY_400,

            accent: palette::GOLD_500,
            accent_strong: palette::GOLD_400,
            on_accent: palette::INK_950,

            wireframe: palette::GOLD_300,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching the Iced base theme a style function receives.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Paper background with darker gold so strokes stay readable.
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::PAPER_50,
            surface: palette::WHITE,
            surface_raised: palette::GRAY_200,

            text_primary: palette::INK_900,
            text_secondary: palette::GRAY_600,

            accent: palette::GOLD_600,
            accent_strong: palette::GOLD_700,
            on_accent: palette::WHITE,

            wireframe: palette::GOLD_700,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::INK_900
            },
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
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Resolved theme: the Iced base theme plus the studio colors.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    /// Resolves `mode`, querying the OS once for [`ThemeMode::System`].
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
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
    fn dark_scheme_is_gold_on_black() {
        let scheme = ColorScheme::dark();
        assert!(scheme.page_background.r < 0.1);
        assert!(scheme.accent.r > scheme.accent.b);
    }

    #[test]
    fn light_scheme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9);
    }

    #[test]
    fn explicit_modes_resolve_without_detection() {
        let dark = AppTheme::new(ThemeMode::Dark);
        assert!(dark.is_dark());
        assert_eq!(dark.iced_theme(), Theme::Dark);
        assert_eq!(dark.colors, ColorScheme::dark());

        let light = AppTheme::new(ThemeMode::Light);
        assert!(!light.is_dark());
        assert_eq!(light.iced_theme(), Theme::Light);
    }

    #[test]
    fn scheme_follows_base_theme() {
        assert_eq!(ColorScheme::for_theme(&Theme::Light), ColorScheme::light());
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
    }

    #[test]
    fn system_mode_detection_does_not_panic() {
        let _ = ThemeMode::System.is_dark();
    }
}
