// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct owns every component state (hero viewer, gallery,
//! contact form, toasts) and translates their effects into tasks: asset
//! loads, page scrolling and config persistence.

mod message;
pub mod paths;
pub mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use section::PageLayout;

use crate::config::{self, Config};
use crate::content::ContentStore;
use crate::i18n::fluent::I18n;
use crate::scene::AssetCache;
use crate::ui::design_tokens::sizing;
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::Section;
use crate::ui::theming::AppTheme;
use crate::ui::viewer::{self, ViewerOptions};
use crate::ui::contact;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Windows narrower than this collapse the navbar links into a menu.
pub const COMPACT_WIDTH: f32 = 900.0;

/// Title key of every warning toast raised at startup.
const WARNING_TITLE_KEY: &str = "notification-warning-title";

/// Last known geometry of the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PageMetrics {
    offset_y: f32,
    viewport: Size,
    /// Measured once the scrollable reported a scroll.
    content_height: Option<f32>,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            viewport: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            content_height: None,
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    store: Arc<ContentStore>,
    assets: Arc<AssetCache>,
    hero: viewer::State,
    gallery: gallery::State,
    contact: contact::State,
    notifications: notifications::Manager,
    menu_open: bool,
    page: PageMetrics,
    last_frame: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("gallery", &self.gallery)
            .field("active_section", &self.active_section())
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the catalog named on the command line, falling back to the
/// built-in one. The returned key names the warning to show, if any.
fn load_catalog(path: Option<&str>) -> (ContentStore, Option<(String, String)>) {
    let Some(path) = path else {
        return (ContentStore::builtin(), None);
    };
    match ContentStore::load_from_path(Path::new(path)) {
        Ok(store) => (store, None),
        Err(err) => {
            log::warn!("falling back to built-in catalog: {}", err);
            (
                ContentStore::builtin(),
                Some(("notification-catalog-load-error".to_string(), path.to_string())),
            )
        }
    }
}

impl App {
    /// Builds every component and starts the initial asset loads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut notifications = notifications::Manager::new(&config.notifications);

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(WARNING_TITLE_KEY, key));
        }

        let (store, catalog_warning) = load_catalog(flags.catalog.as_deref());
        if let Some((key, path)) = catalog_warning {
            notifications.push(Notification::warning(WARNING_TITLE_KEY, key).with_arg("path", path));
        }
        let store = Arc::new(store);

        let hero = viewer::State::new(
            store.hero_asset().clone(),
            ViewerOptions {
                auto_rotate: true,
                show_controls: true,
                title: None,
                height: sizing::HERO_VIEWER_HEIGHT,
            },
            &config.viewer,
        );
        let gallery = gallery::State::new(Arc::clone(&store), &config.viewer);

        let app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            config,
            store,
            assets: Arc::new(AssetCache::default()),
            hero,
            gallery,
            contact: contact::State::default(),
            notifications,
            menu_open: false,
            page: PageMetrics::default(),
            last_frame: None,
        };

        let hero_load = app.load_hero();
        let card_loads = app
            .gallery
            .initial_loads()
            .into_iter()
            .map(|(slot, asset)| app.load_gallery_asset(slot, asset));
        let task = Task::batch(std::iter::once(hero_load).chain(card_loads).collect::<Vec<_>>());

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.needs_frames()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn needs_frames(&self) -> bool {
        self.hero.needs_frames() || self.gallery.needs_frames()
    }

    fn columns(&self) -> usize {
        gallery::columns_for_width(self.page.viewport.width)
    }

    fn layout(&self) -> PageLayout {
        PageLayout {
            visible_cards: self.gallery.visible_items().len(),
            columns: self.columns(),
        }
    }

    /// Section currently under the navbar.
    fn active_section(&self) -> Section {
        self.layout().section_at(self.page.offset_y)
    }

    fn load_hero(&self) -> Task<Message> {
        viewer::load(Arc::clone(&self.assets), self.hero.asset_ref().clone())
            .map(|message| Message::Hero(crate::ui::sections::hero::Message::Viewer(message)))
    }

    fn load_gallery_asset(
        &self,
        slot: gallery::ViewerSlot,
        asset: crate::content::AssetRef,
    ) -> Task<Message> {
        viewer::load(Arc::clone(&self.assets), asset)
            .map(move |message| Message::Gallery(gallery::Message::Viewer(slot, message)))
    }
}
