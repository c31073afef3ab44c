// SPDX-License-Identifier: MPL-2.0
use super::{Field, Message, State};
use crate::content::StudioInfo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{alignment, Element, Length};

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub studio: &'a StudioInfo,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let header = column![
            text(i18n.tr("contact-title"))
                .size(typography::TITLE_LG)
                .style(styles::text::accent),
            text(i18n.tr("contact-subtitle"))
                .size(typography::BODY_LG)
                .style(styles::text::secondary),
        ]
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center);

        let body = row![
            self.form(i18n),
            column![info_card(ctx), cta_card(i18n)]
                .spacing(spacing::LG)
                .width(Length::FillPortion(1)),
        ]
        .spacing(spacing::XL);

        container(
            column![container(header).center_x(Length::Fill), body]
                .spacing(spacing::XXL)
                .max_width(sizing::CONTENT_MAX_WIDTH),
        )
        .center_x(Length::Fill)
        .height(Length::Fixed(sizing::CONTACT_SECTION_HEIGHT))
        .padding([spacing::SECTION, spacing::LG])
        .into()
    }

    fn form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let fields = Column::with_children(Field::ALL.into_iter().map(|field| self.input(field, i18n)))
            .spacing(spacing::MD);

        let submit = button(
            container(text(i18n.tr("contact-send")).size(typography::BODY_LG)).center_x(Length::Fill),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .on_press(Message::Submit)
        .style(styles::button::primary);

        container(
            column![
                text(i18n.tr("contact-form-heading"))
                    .size(typography::TITLE_MD)
                    .style(styles::text::accent),
                fields,
                submit,
            ]
            .spacing(spacing::LG),
        )
        .width(Length::FillPortion(1))
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
    }

    fn input<'a>(&'a self, field: Field, i18n: &'a I18n) -> Element<'a, Message> {
        let invalid = self.is_invalid(field);
        let mut label = i18n.tr(field.label_key());
        if field.is_required() {
            label.push_str(" *");
        }

        let mut input = text_input(&i18n.tr(field.placeholder_key()), self.value(field))
            .on_input(move |value| Message::FieldChanged(field, value))
            .padding(spacing::SM)
            .style(styles::input::field(invalid));
        if field == Field::Message {
            input = input.on_submit(Message::Submit);
        }

        let mut group = column![text(label).size(typography::BODY), input].spacing(spacing::XXS);
        if invalid {
            let hint = match field {
                Field::Email => "contact-error-email",
                _ => "contact-error-required",
            };
            group = group.push(
                text(i18n.tr(hint))
                    .size(typography::CAPTION)
                    .style(styles::text::error),
            );
        }
        group.into()
    }
}

fn info_card<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let contact = &ctx.studio.contact;
    let entries = [
        ("contact-info-email", contact.email.as_str()),
        ("contact-info-phone", contact.phone.as_str()),
        ("contact-info-address", contact.address.as_str()),
    ];

    let lines = Column::with_children(entries.into_iter().map(|(key, value)| {
        column![
            text(ctx.i18n.tr(key)).size(typography::BODY_LG),
            text(value).size(typography::BODY).style(styles::text::secondary),
        ]
        .spacing(spacing::XXS)
        .into()
    }))
    .spacing(spacing::MD);

    container(
        column![
            text(ctx.i18n.tr("contact-info-heading"))
                .size(typography::TITLE_MD)
                .style(styles::text::accent),
            lines,
        ]
        .spacing(spacing::LG),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(styles::container::card)
    .into()
}

fn cta_card(i18n: &I18n) -> Element<'_, Message> {
    container(
        column![
            text(i18n.tr("contact-cta-heading"))
                .size(typography::TITLE_MD)
                .style(styles::text::accent),
            text(i18n.tr("contact-cta-body")).style(styles::text::secondary),
            button(text(i18n.tr("contact-view-more")))
                .on_press(Message::ViewPortfolio)
                .style(styles::button::outline),
        ]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(styles::container::card)
    .into()
}
