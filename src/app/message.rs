// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections::hero;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Gallery(gallery::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved or was resized.
    PageScrolled {
        offset_y: f32,
        viewport: Size,
        content_height: f32,
    },
    WindowResized(Size),
    /// A redraw is due while some viewer animates.
    Frame(Instant),
    /// Periodic tick for toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file replacing the built-in showcase.
    pub catalog: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `M3DAN_STUDIO_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional download directory for remote assets.
    /// Takes precedence over `M3DAN_STUDIO_CACHE_DIR`.
    pub cache_dir: Option<String>,
}
