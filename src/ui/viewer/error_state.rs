// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown when a viewer's asset fails to load.

use crate::error::AssetError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, column, container, text};
use iced::{alignment, Element, Length, Theme};

/// Localized failure message with optional technical details.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    friendly_key: &'static str,
    details: String,
    show_details: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleDetails,
}

impl State {
    #[must_use]
    pub fn new(error: &AssetError) -> Self {
        Self {
            friendly_key: error.i18n_key(),
            details: error.to_string(),
            show_details: false,
        }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::ToggleDetails => self.show_details = !self.show_details,
        }
    }

    #[must_use]
    pub fn friendly_key(&self) -> &'static str {
        self.friendly_key
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }

    /// Renders the placeholder. `on_details` and `on_retry` wrap the two
    /// buttons into the caller's message type.
    pub fn view<'a, M: Clone + 'a>(
        &'a self,
        i18n: &'a I18n,
        on_details: M,
        on_retry: M,
    ) -> Element<'a, M> {
        let toggle_label = if self.show_details {
            i18n.tr("viewer-error-details-hide")
        } else {
            i18n.tr("viewer-error-details-show")
        };

        let mut content = column![
            text(i18n.tr("viewer-error-heading"))
                .size(typography::TITLE_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).error),
                }),
            text(i18n.tr(self.friendly_key)).size(typography::BODY),
        ]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

        if self.show_details {
            content = content.push(text(self.details.as_str()).size(typography::CAPTION));
        }

        content = content.push(
            iced::widget::row![
                button(text(toggle_label).size(typography::CAPTION))
                    .style(styles::button::link)
                    .on_press(on_details),
                button(text(i18n.tr("viewer-retry")).size(typography::CAPTION))
                    .style(styles::button::outline)
                    .on_press(on_retry),
            ]
            .spacing(spacing::XS),
        );

        container(content)
            .padding(spacing::MD)
            .center(Length::Fill)
            .into()
    }
}
