// SPDX-License-Identifier: MPL-2.0
//! Message routing for [`App`].
//!
//! Components return effects; this module turns them into tasks and keeps
//! the cross-cutting state (theme, locale, page scroll) in sync.

use super::{App, Message};
use crate::config;
use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::sections::{hero, Section};
use crate::ui::theming::{AppTheme, ThemeMode};
use crate::ui::viewer;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Identifier of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => self.handle_navbar_message(message),
            Message::Hero(hero::Message::ScrollTo(section)) => self.scroll_to(section),
            Message::Hero(hero::Message::Viewer(message)) => match self.hero.handle(message) {
                viewer::Effect::None => Task::none(),
                viewer::Effect::LoadAsset(_) => self.load_hero(),
            },
            Message::Gallery(message) => self.handle_gallery_message(message),
            Message::Contact(message) => self.handle_contact_message(message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::PageScrolled {
                offset_y,
                viewport,
                content_height,
            } => {
                self.page.offset_y = offset_y;
                self.page.viewport = viewport;
                self.page.content_height = Some(content_height);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.page.viewport = size;
                // Reflowing the grid changes the page height.
                self.page.content_height = None;
                if size.width >= super::COMPACT_WIDTH {
                    self.menu_open = false;
                }
                Task::none()
            }
            Message::Frame(now) => {
                self.advance_frame(now);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn handle_navbar_message(&mut self, message: navbar::Message) -> Task<Message> {
        match navbar::update(message, &mut self.menu_open) {
            navbar::Event::None => Task::none(),
            navbar::Event::ScrollTo(section) => self.scroll_to(section),
            navbar::Event::ToggleTheme => {
                let mode = if self.theme.is_dark() {
                    ThemeMode::Light
                } else {
                    ThemeMode::Dark
                };
                log::debug!("switching theme to {:?}", mode);
                self.theme = AppTheme::new(mode);
                self.config.general.theme_mode = mode;
                self.persist_config();
                Task::none()
            }
            navbar::Event::NextLanguage => {
                self.next_language();
                Task::none()
            }
        }
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        match self.gallery.handle(message) {
            gallery::Effect::None => Task::none(),
            gallery::Effect::LoadAsset(slot, asset) => self.load_gallery_asset(slot, asset),
            gallery::Effect::LoadCards(loads) => Task::batch(
                loads
                    .into_iter()
                    .map(|(slot, asset)| self.load_gallery_asset(slot, asset))
                    .collect::<Vec<_>>(),
            ),
        }
    }

    fn handle_contact_message(&mut self, message: contact::Message) -> Task<Message> {
        match self.contact.handle(message, &mut self.notifications) {
            contact::Effect::ShowPortfolio => self.scroll_to(Section::Portfolio),
            contact::Effect::None | contact::Effect::Submitted | contact::Effect::Rejected(_) => {
                Task::none()
            }
        }
    }

    /// Snaps the page so `section` starts at the top of the viewport.
    fn scroll_to(&self, section: Section) -> Task<Message> {
        let y = self.layout().relative_offset(
            section,
            self.page.viewport.height,
            self.page.content_height,
        );
        log::debug!("scrolling to {:?} (relative offset {:.3})", section, y);
        operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
    }

    /// Advances every viewer by the time elapsed since the previous frame.
    fn advance_frame(&mut self, now: Instant) {
        let delta = self
            .last_frame
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());

        self.hero.tick(delta);
        self.gallery.tick(delta);

        // The next burst of frames starts from a zero delta.
        self.last_frame = self.needs_frames().then_some(now);
    }

    fn next_language(&mut self) {
        let locales = &self.i18n.available_locales;
        if locales.is_empty() {
            return;
        }
        let current = locales
            .iter()
            .position(|locale| locale == self.i18n.current_locale())
            .unwrap_or(0);
        let next = locales[(current + 1) % locales.len()].clone();

        log::debug!("switching locale to {}", next);
        self.config.general.language = Some(next.to_string());
        self.i18n.set_locale(next);
        self.persist_config();
    }

    fn persist_config(&mut self) {
        if let Err(err) = config::save(&self.config) {
            log::warn!("could not save settings: {}", err);
            self.notifications.push(Notification::warning(
                "notification-warning-title",
                "notification-config-save-error",
            ));
        }
    }
}
