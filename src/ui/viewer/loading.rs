// SPDX-License-Identifier: MPL-2.0
//! Spinner shown while an asset loads.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::animated_spinner::{self, AnimatedSpinner};
use iced::widget::{column, container, text};
use iced::{alignment, Element, Length};

/// Spinner phase, advanced by the host frame clock while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    phase: f32,
}

impl State {
    pub fn tick(&mut self, delta: f32) {
        self.phase = animated_spinner::advance_phase(self.phase, delta);
    }

    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn view<'a, M: 'a>(&self, i18n: &I18n, colors: &ColorScheme) -> Element<'a, M> {
        let spinner = AnimatedSpinner::new(colors.accent, self.phase).into_element();
        let label = text(i18n.tr("viewer-loading")).size(typography::CAPTION);

        container(
            column![spinner, label]
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center),
        )
        .center(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_moves_the_spinner() {
        let mut state = State::default();
        state.tick(0.1);
        assert!(state.phase() > 0.0);
    }
}
