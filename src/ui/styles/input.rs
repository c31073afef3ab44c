// SPDX-License-Identifier: MPL-2.0
//! Text input styles for the contact form.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Form field; `invalid` outlines it in the error color until edited.
pub fn field(invalid: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let colors = ColorScheme::for_theme(theme);
        let edge = if invalid {
            colors.error
        } else {
            match status {
                text_input::Status::Focused { .. } | text_input::Status::Hovered => colors.accent,
                _ => colors.surface_raised,
            }
        };

        text_input::Style {
            background: Background::Color(colors.surface),
            border: Border {
                color: edge,
                width: if invalid {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::SM.into(),
            },
            icon: colors.text_secondary,
            placeholder: colors.text_secondary,
            value: colors.text_primary,
            selection: Color {
                a: 0.4,
                ..colors.accent
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_uses_error_border() {
        let style = field(true)(&Theme::Dark, text_input::Status::Active);
        assert_eq!(style.border.color, ColorScheme::dark().error);
    }

    #[test]
    fn valid_field_highlights_on_hover() {
        let style = field(false)(&Theme::Dark, text_input::Status::Hovered);
        assert_eq!(style.border.color, ColorScheme::dark().accent);
    }
}
