// SPDX-License-Identifier: MPL-2.0
//! `m3dan_studio` is the portfolio showcase of a 3D animation studio, built
//! with the Iced GUI framework.
//!
//! It presents the studio, a filterable gallery of 3D works rendered by an
//! embedded wireframe viewer, and a contact form that validates input locally.

#![doc(html_root_url = "https://docs.rs/m3dan_studio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod scene;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
