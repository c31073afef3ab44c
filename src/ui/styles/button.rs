// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid gold call-to-action button.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, glow) = match status {
        button::Status::Hovered => (colors.accent_strong, shadow::GLOW),
        button::Status::Disabled => (colors.surface_raised, shadow::NONE),
        button::Status::Active | button::Status::Pressed => (colors.accent, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.on_accent,
        border: Border {
            color: background,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: glow,
        snap: true,
    }
}

/// Transparent button with a gold outline.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(colors.accent)), colors.on_accent)
        }
        _ => (None, colors.accent),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: colors.accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    nav_link(false)(theme, status)
}

/// Borderless navbar link; `active` marks the section in view.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => colors.accent_strong,
            _ if active => colors.accent,
            _ => colors.text_primary,
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active { colors.accent } else { Color::TRANSPARENT },
                width: if active { border::WIDTH_MD } else { 0.0 },
                radius: radius::NONE.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Category filter chip; `selected` marks the active filter.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let hovered = matches!(status, button::Status::Hovered);
        let (background, text_color, edge) = if selected {
            (Some(colors.accent), colors.on_accent, colors.accent)
        } else if hovered {
            (Some(colors.surface_raised), colors.accent, colors.accent)
        } else {
            (None, colors.text_secondary, colors.surface_raised)
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                color: edge,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Small translucent buttons drawn over a viewer viewport.
pub fn viewer_control(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let alpha = match status {
        button::Status::Hovered => 0.9,
        button::Status::Pressed => 1.0,
        _ => 0.6,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..colors.surface_raised
        })),
        text_color: colors.accent_strong,
        border: Border {
            color: Color {
                a: alpha,
                ..colors.accent
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background_of(style: &button::Style) -> Option<Color> {
        match style.background {
            Some(Background::Color(color)) => Some(color),
            _ => None,
        }
    }

    #[test]
    fn primary_button_uses_gold_accent() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(background_of(&style), Some(ColorScheme::dark().accent));
    }

    #[test]
    fn selected_chip_is_filled_and_idle_chip_is_not() {
        let selected = chip(true)(&Theme::Dark, button::Status::Active);
        let idle = chip(false)(&Theme::Dark, button::Status::Active);
        assert!(background_of(&selected).is_some());
        assert!(background_of(&idle).is_none());
    }

    #[test]
    fn active_nav_link_is_gold() {
        let active = nav_link(true)(&Theme::Dark, button::Status::Active);
        let idle = nav_link(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.text_color, ColorScheme::dark().accent);
        assert_eq!(idle.text_color, ColorScheme::dark().text_primary);
    }

    #[test]
    fn viewer_control_brightens_on_hover() {
        let normal = viewer_control(&Theme::Dark, button::Status::Active);
        let hover = viewer_control(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
