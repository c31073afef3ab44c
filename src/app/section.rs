// SPDX-License-Identifier: MPL-2.0
//! Page geometry: where each section starts inside the scrollable page.
//!
//! Every section has a fixed height except the portfolio, whose grid grows
//! with the number of visible cards and the column count.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::gallery;
use crate::ui::sections::Section;

/// Padding below the portfolio grid.
pub const PORTFOLIO_BOTTOM_PADDING: f32 = spacing::SECTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Cards currently shown by the gallery filter.
    pub visible_cards: usize,
    pub columns: usize,
}

impl PageLayout {
    #[must_use]
    pub fn height_of(&self, section: Section) -> f32 {
        match section {
            Section::Home => sizing::HERO_SECTION_HEIGHT,
            Section::Portfolio => {
                sizing::PORTFOLIO_HEADER_HEIGHT
                    + gallery::GRID_GAP
                    + gallery::grid_height(self.visible_cards, self.columns)
                    + PORTFOLIO_BOTTOM_PADDING
            }
            Section::About => sizing::ABOUT_SECTION_HEIGHT,
            Section::Contact => sizing::CONTACT_SECTION_HEIGHT,
        }
    }

    /// Distance from the top of the page to the top of `section`.
    #[must_use]
    pub fn top_of(&self, section: Section) -> f32 {
        Section::ALL
            .into_iter()
            .take_while(|candidate| *candidate != section)
            .map(|candidate| self.height_of(candidate))
            .sum()
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        Section::ALL.into_iter().map(|s| self.height_of(s)).sum()
    }

    /// Section under the navbar when the page is scrolled by `offset_y`.
    #[must_use]
    pub fn section_at(&self, offset_y: f32) -> Section {
        let probe = offset_y.max(0.0) + sizing::NAVBAR_HEIGHT;
        Section::ALL
            .into_iter()
            .rev()
            .find(|section| self.top_of(*section) <= probe)
            .unwrap_or_default()
    }

    /// Relative scroll offset in `[0, 1]` that brings `section` to the top.
    ///
    /// `content_height` is the measured page height when known; the computed
    /// layout height is used otherwise.
    #[must_use]
    pub fn relative_offset(
        &self,
        section: Section,
        viewport_height: f32,
        content_height: Option<f32>,
    ) -> f32 {
        let total = content_height.unwrap_or_else(|| self.total_height());
        let scrollable = total - viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.top_of(section) / scrollable).clamp(0.0, 1.0)
    }
}
