// SPDX-License-Identifier: MPL-2.0
//! Landing section: brand, tagline, call-to-action buttons and the hero viewer.

use super::Section;
use crate::content::StudioInfo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::viewer;
use iced::widget::{button, column, container, row, text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub studio: &'a StudioInfo,
    pub viewer: &'a viewer::State,
}

#[derive(Debug, Clone)]
pub enum Message {
    ScrollTo(Section),
    Viewer(viewer::Message),
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let brand = column![
        text(i18n.tr("hero-brand"))
            .size(typography::DISPLAY * 1.5)
            .style(styles::text::accent),
        text(i18n.tr("hero-subbrand"))
            .size(typography::TITLE_MD)
            .style(styles::text::secondary),
    ]
    .spacing(spacing::XS);

    let buttons = row![
        button(text(i18n.tr("hero-view-portfolio")).size(typography::BODY_LG))
            .padding([spacing::SM, spacing::LG])
            .on_press(Message::ScrollTo(Section::Portfolio))
            .style(styles::button::primary),
        button(text(i18n.tr("hero-get-in-touch")).size(typography::BODY_LG))
            .padding([spacing::SM, spacing::LG])
            .on_press(Message::ScrollTo(Section::Contact))
            .style(styles::button::outline),
    ]
    .spacing(spacing::MD);

    let pitch = column![
        brand,
        text(ctx.studio.tagline.as_str()).size(typography::TITLE_LG),
        text(ctx.studio.description.as_str())
            .size(typography::BODY_LG)
            .style(styles::text::secondary),
        buttons,
    ]
    .spacing(spacing::LG)
    .width(Length::FillPortion(1));

    let viewer = container(
        ctx.viewer
            .view(viewer::ViewContext {
                i18n,
                colors: ctx.colors,
            })
            .map(Message::Viewer),
    )
    .width(Length::FillPortion(1));

    let scroll_hint = button(text("⌄").size(typography::TITLE_LG))
        .on_press(Message::ScrollTo(Section::Portfolio))
        .style(styles::button::link);

    let content = column![
        container(
            row![pitch, viewer]
                .spacing(spacing::XXL)
                .align_y(alignment::Vertical::Center)
        )
        .max_width(sizing::CONTENT_MAX_WIDTH),
        scroll_hint,
    ]
    .spacing(spacing::XL)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .center_x(Length::Fill)
        .height(Length::Fixed(sizing::HERO_SECTION_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .padding([sizing::NAVBAR_HEIGHT, spacing::LG])
        .into()
}
