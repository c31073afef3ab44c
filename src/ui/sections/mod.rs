// SPDX-License-Identifier: MPL-2.0
//! Page sections of the single-page showcase.
//!
//! The hero and about sections are plain view functions. The portfolio and
//! contact sections are stateful and live in [`crate::ui::gallery`] and
//! [`crate::ui::contact`].

pub mod about;
pub mod hero;

/// Anchors of the scrollable page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Portfolio,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Portfolio,
        Section::About,
        Section::Contact,
    ];

    /// Translation key of the navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Portfolio => "nav-portfolio",
            Section::About => "nav-about",
            Section::Contact => "nav-contact",
        }
    }
}
