// SPDX-License-Identifier: MPL-2.0
//! Studio story, highlights, services and the consultation call-out.

use crate::content::{Highlight, StudioInfo};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, row, text, Column};
use iced::{alignment, Element, Length};

pub fn view<'a, M: 'a>(i18n: &'a I18n, studio: &'a StudioInfo) -> Element<'a, M> {
    let header = column![
        text(i18n.tr_with_args("about-title", &[("name", studio_short_name(studio))]))
            .size(typography::TITLE_LG)
            .style(styles::text::accent),
        text(studio.tagline.as_str())
            .size(typography::BODY_LG)
            .style(styles::text::secondary),
    ]
    .spacing(spacing::SM)
    .align_x(alignment::Horizontal::Center);

    let story = card(
        column![
            heading(i18n.tr("about-story-heading")),
            text(studio.description.as_str())
                .size(typography::BODY_LG)
                .style(styles::text::secondary),
            Column::with_children(studio.highlights.iter().map(highlight)).spacing(spacing::MD),
        ]
        .spacing(spacing::LG),
    );

    let services = Column::with_children(studio.services.iter().map(|service| {
        row![
            text("◆").size(typography::CAPTION).style(styles::text::accent),
            text(service.as_str()).size(typography::BODY_LG),
        ]
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .into()
    }))
    .spacing(spacing::SM);

    let cta = container(
        column![
            text(i18n.tr("about-cta-heading"))
                .size(typography::TITLE_SM)
                .style(styles::text::accent),
            text(i18n.tr("about-cta-body")).style(styles::text::secondary),
            container(text(i18n.tr("about-cta-badge")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::badge(true)),
        ]
        .spacing(spacing::SM),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::band);

    let offer = card(
        column![heading(i18n.tr("about-services-heading")), services, cta].spacing(spacing::LG),
    );

    let content = column![
        container(header).center_x(Length::Fill),
        row![story, offer].spacing(spacing::XL),
    ]
    .spacing(spacing::XXL)
    .max_width(sizing::CONTENT_MAX_WIDTH);

    container(content)
        .center_x(Length::Fill)
        .height(Length::Fixed(sizing::ABOUT_SECTION_HEIGHT))
        .padding([spacing::SECTION, spacing::LG])
        .style(styles::container::band)
        .into()
}

/// First word of the studio name, e.g. "M3DAN" for "M3DAN STUDIO ANIMATION".
fn studio_short_name(studio: &StudioInfo) -> &str {
    studio.name.split_whitespace().next().unwrap_or(&studio.name)
}

fn heading<'a, M: 'a>(label: String) -> Element<'a, M> {
    text(label)
        .size(typography::TITLE_MD)
        .style(styles::text::accent)
        .into()
}

fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    container(content)
        .width(Length::FillPortion(1))
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}

fn highlight<'a, M: 'a>(highlight: &'a Highlight) -> Element<'a, M> {
    row![
        container(
            text(highlight.value.as_str())
                .size(typography::TITLE_SM)
                .style(styles::text::accent)
        )
        .width(Length::Fixed(spacing::XXL * 1.5)),
        column![
            text(highlight.label.as_str()).size(typography::BODY_LG),
            text(highlight.caption.as_str())
                .size(typography::BODY)
                .style(styles::text::secondary),
        ]
        .spacing(spacing::XXS),
    ]
    .spacing(spacing::MD)
    .align_y(alignment::Vertical::Center)
    .into()
}
