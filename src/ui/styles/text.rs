// SPDX-License-Identifier: MPL-2.0
//! Text color helpers.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

/// Muted body copy.
pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

/// Gold headings and brand marks.
pub fn accent(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).accent),
    }
}

pub fn error(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).error),
    }
}
