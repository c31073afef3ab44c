// SPDX-License-Identifier: MPL-2.0
//! Viewer control bar: play/pause, zoom out, zoom readout, zoom in, reset.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::ZoomFactor;
use crate::ui::styles;
use iced::widget::{button, container, row, text, tooltip, Button};
use iced::{alignment, Element};

fn control<'a>(label: &'a str, message: Option<Message>) -> Button<'a, Message> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::viewer_control)
        .on_press_maybe(message)
}

fn with_tooltip<'a>(content: Button<'a, Message>, hint: String) -> Element<'a, Message> {
    tooltip(
        content,
        container(text(hint).size(typography::CAPTION)).padding(spacing::XXS),
        tooltip::Position::Top,
    )
    .into()
}

/// Builds the control bar. Zoom buttons are disabled at the bounds; the
/// play button only appears when the asset has an animation clip.
pub fn view<'a>(
    i18n: &I18n,
    zoom: ZoomFactor,
    playing: bool,
    has_clip: bool,
) -> Element<'a, Message> {
    let percent = zoom.percent().to_string();
    let zoom_label = i18n.tr_with_args("viewer-zoom-label", &[("percent", percent.as_str())]);

    let mut bar = row![].spacing(spacing::XXS).align_y(alignment::Vertical::Center);

    if has_clip {
        let (glyph, hint) = if playing {
            ("❚❚", i18n.tr("viewer-pause"))
        } else {
            ("▶", i18n.tr("viewer-play"))
        };
        bar = bar.push(with_tooltip(control(glyph, Some(Message::TogglePlay)), hint));
    }

    bar = bar
        .push(with_tooltip(
            control("−", (!zoom.is_min()).then_some(Message::ZoomOut)),
            i18n.tr("viewer-zoom-out"),
        ))
        .push(
            container(text(zoom_label).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS]),
        )
        .push(with_tooltip(
            control("+", (!zoom.is_max()).then_some(Message::ZoomIn)),
            i18n.tr("viewer-zoom-in"),
        ))
        .push(with_tooltip(
            control("⟲", Some(Message::Reset)),
            i18n.tr("viewer-reset"),
        ));

    bar.into()
}
