// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections. The navbar, the detail
//! overlay and the toasts are layered above it with `stack!`.

use super::update::PAGE_SCROLLABLE_ID;
use super::{App, Message};
use crate::ui::design_tokens::spacing;
use crate::ui::navbar;
use crate::ui::notifications::Toast;
use crate::ui::sections::{about, hero};
use crate::ui::styles;
use crate::ui::{contact, gallery};
use iced::widget::scrollable::Viewport;
use iced::widget::{column, container, stack, Column, Id, Scrollable};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let colors = &app.theme.colors;
    let studio = app.store.studio();

    let hero = hero::view(hero::ViewContext {
        i18n: &app.i18n,
        colors,
        studio,
        viewer: &app.hero,
    })
    .map(Message::Hero);

    let gallery_ctx = gallery::ViewContext {
        i18n: &app.i18n,
        colors,
        columns: app.columns(),
    };
    let portfolio = container(app.gallery.view(gallery_ctx).map(Message::Gallery))
        .width(Length::Fill)
        .padding(iced::Padding {
            bottom: super::section::PORTFOLIO_BOTTOM_PADDING,
            ..iced::Padding::ZERO
        });

    let contact = app
        .contact
        .view(contact::ViewContext {
            i18n: &app.i18n,
            studio,
        })
        .map(Message::Contact);

    let about: Element<'_, Message> = about::view(&app.i18n, studio);

    let page: Column<'_, Message> = column![hero, portfolio, about, contact].width(Length::Fill);

    let page = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            offset_y: viewport.absolute_offset().y,
            viewport: viewport.bounds().size(),
            content_height: viewport.content_bounds().height,
        });

    let navbar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        brand: studio.name.split_whitespace().next().unwrap_or(&studio.name),
        active: app.active_section(),
        menu_open: app.menu_open,
        compact: app.page.viewport.width < super::COMPACT_WIDTH,
        is_dark: app.theme.is_dark(),
    })
    .map(Message::Navbar);

    let mut layers = stack![
        container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page),
        container(navbar).width(Length::Fill),
    ];

    if let Some(overlay) = app.gallery.view_overlay(gallery_ctx) {
        layers = layers.push(overlay.map(Message::Gallery));
    }

    layers = layers.push(
        container(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS),
    );

    layers.into()
}
