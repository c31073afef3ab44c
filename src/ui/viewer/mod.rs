// SPDX-License-Identifier: MPL-2.0
//! Embedded 3D viewer widget.
//!
//! Every viewer instance (gallery cards, the detail overlay, the hero) owns
//! its own [`State`]: zoom, play/pause, orbit pose and load status are never
//! shared. Only the loaded [`SceneAsset`](crate::scene::SceneAsset) is
//! shared, read-only, through the asset cache.
//!
//! The parent drives a viewer with three calls:
//! - [`State::handle`] for user intent, returning an [`Effect`]
//! - [`State::tick`] once per frame while [`State::needs_frames`] holds
//! - [`load`] to resolve the asset into a [`Message::AssetLoaded`]

pub mod component;
pub mod controls;
pub mod error_state;
pub mod loading;

pub use component::{load, Effect, LoadStatus, Message, State, ViewerOptions};

use crate::i18n::fluent::I18n;
use crate::ui::theming::ColorScheme;

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}
