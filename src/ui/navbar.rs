// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned above the page.
//!
//! Section links scroll the page; the link of the section currently in view
//! is highlighted. Narrow windows collapse the links into a dropdown menu.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::Section;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub brand: &'a str,
    pub active: Section,
    pub menu_open: bool,
    /// Collapse the section links behind a menu button.
    pub compact: bool,
    pub is_dark: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    ScrollTo(Section),
    ToggleTheme,
    NextLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(Section),
    ToggleTheme,
    NextLanguage,
}

pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::ScrollTo(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::ToggleTheme => Event::ToggleTheme,
        Message::NextLanguage => Event::NextLanguage,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        text(ctx.brand)
            .size(typography::TITLE_SM)
            .style(styles::text::accent),
    )
    .on_press(Message::ScrollTo(Section::Home))
    .style(styles::button::link);

    let theme_label = if ctx.is_dark {
        ctx.i18n.tr("nav-theme-light")
    } else {
        ctx.i18n.tr("nav-theme-dark")
    };
    let toggles = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text(theme_label).size(typography::CAPTION))
                .on_press(Message::ToggleTheme)
                .style(styles::button::outline),
        )
        .push(
            button(text(ctx.i18n.tr("nav-language")).size(typography::CAPTION))
                .on_press(Message::NextLanguage)
                .style(styles::button::outline),
        );

    let mut bar = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        bar = bar.push(
            button(text("☰").size(typography::TITLE_SM))
                .on_press(Message::ToggleMenu)
                .style(styles::button::link),
        );
    } else {
        bar = bar.push(Row::with_children(links(&ctx)).spacing(spacing::XS));
    }
    bar = bar.push(toggles);

    let bar = container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center);

    let mut content = Column::new().width(Length::Fill).push(bar);
    if ctx.compact && ctx.menu_open {
        content = content.push(
            container(Column::with_children(links(&ctx)).spacing(spacing::XXS))
                .padding([spacing::XS, spacing::LG]),
        );
    }

    container(content)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn links<'a>(ctx: &ViewContext<'a>) -> Vec<Element<'a, Message>> {
    Section::ALL
        .into_iter()
        .map(|section| {
            button(text(ctx.i18n.tr(section.label_key())).size(typography::BODY))
                .on_press(Message::ScrollTo(section))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::nav_link(section == ctx.active))
                .into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(i18n: &I18n, compact: bool, menu_open: bool) -> ViewContext<'_> {
        ViewContext {
            i18n,
            brand: "M3DAN",
            active: Section::About,
            menu_open,
            compact,
            is_dark: true,
        }
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(context(&i18n, false, false));
    }

    #[test]
    fn navbar_view_renders_compact_menu() {
        let i18n = I18n::default();
        let _element = view(context(&i18n, true, true));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(menu_open);
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }

    #[test]
    fn section_link_closes_menu_and_scrolls() {
        let mut menu_open = true;
        let event = update(Message::ScrollTo(Section::Contact), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::ScrollTo(Section::Contact));
    }

    #[test]
    fn toggles_keep_menu_state() {
        let mut menu_open = true;
        assert_eq!(update(Message::ToggleTheme, &mut menu_open), Event::ToggleTheme);
        assert_eq!(update(Message::NextLanguage, &mut menu_open), Event::NextLanguage);
        assert!(menu_open);
    }
}
