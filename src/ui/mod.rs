// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Every component follows the Elm-style "state down, messages up" pattern:
//! a `State`, a `Message` enum, and a `handle`/`update` function returning an
//! `Effect` or `Event` for the parent.
//!
//! # Page Sections
//!
//! - [`sections`] - Hero and about sections, and the [`sections::Section`] anchors
//! - [`gallery`] - Filterable portfolio grid with the detail overlay
//! - [`contact`] - Contact form with local validation
//! - [`navbar`] - Section links, theme and language switches
//!
//! # Shared Infrastructure
//!
//! - [`viewer`] - Embedded 3D viewer widget
//! - [`state`] - Zoom, orbit and playback value types used by the viewer
//! - [`notifications`] - Toast notifications and the [`notifications::Notifier`] capability
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers, inputs, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and the studio color scheme

pub mod contact;
pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
