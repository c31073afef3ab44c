// SPDX-License-Identifier: MPL-2.0
//! Portfolio grid, category chips and the detail overlay.

use super::state::{CategoryFilter, Message, OverlayRegion, State, ViewerSlot};
use crate::content::ShowcaseItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::viewer;
use iced::widget::{
    button, column, container, mouse_area, opaque, row, text, Column, Row, Space,
};
use iced::{alignment, Element, Length};

/// Animation labels shown on a card; the overlay lists all of them.
pub const CARD_ANIMATION_LIMIT: usize = 3;

/// Horizontal gap between cards, also used between grid rows.
pub const GRID_GAP: f32 = spacing::LG;

const MAX_COLUMNS: usize = 3;

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Cards per grid row, see [`columns_for_width`].
    pub columns: usize,
}

impl<'a> ViewContext<'a> {
    fn viewer(self) -> viewer::ViewContext<'a> {
        viewer::ViewContext {
            i18n: self.i18n,
            colors: self.colors,
        }
    }
}

/// Cards that fit a window `width` pixels wide.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    let usable = width.min(sizing::CONTENT_MAX_WIDTH) - 2.0 * spacing::LG;
    let fit = ((usable + GRID_GAP) / (sizing::CARD_WIDTH + GRID_GAP)).floor();
    if fit.is_finite() && fit >= 1.0 {
        (fit as usize).min(MAX_COLUMNS)
    } else {
        1
    }
}

/// Height of a grid of `items` cards laid out in `columns` columns.
#[must_use]
pub fn grid_height(items: usize, columns: usize) -> f32 {
    let rows = items.div_ceil(columns.max(1));
    if rows == 0 {
        return 0.0;
    }
    rows as f32 * sizing::CARD_HEIGHT + (rows - 1) as f32 * GRID_GAP
}

impl State {
    /// Section header, category chips and the card grid.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = column![
            text(ctx.i18n.tr("gallery-title"))
                .size(typography::TITLE_LG)
                .style(styles::text::accent),
            text(ctx.i18n.tr("gallery-subtitle"))
                .size(typography::BODY_LG)
                .style(styles::text::secondary),
            self.chips(ctx.i18n),
        ]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

        let header = container(header)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PORTFOLIO_HEADER_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding([0.0, spacing::LG]);

        column![header, self.grid(ctx)]
            .spacing(spacing::LG)
            .width(Length::Fill)
            .into()
    }

    fn chips<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let all = chip(
            i18n.tr("gallery-filter-all"),
            CategoryFilter::All,
            self.filter(),
        );
        let categories = self.store().categories().into_iter().map(|category| {
            let label = category.to_string();
            chip(label, CategoryFilter::Only(category), self.filter())
        });

        Row::with_children(std::iter::once(all).chain(categories))
            .spacing(spacing::XS)
            .wrap()
            .into()
    }

    fn grid<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let columns = ctx.columns.max(1);
        let items = self.visible_items();

        if items.is_empty() {
            return container(
                text(ctx.i18n.tr("gallery-empty")).style(styles::text::secondary),
            )
            .center_x(Length::Fill)
            .into();
        }

        let rows = items.chunks(columns).map(|chunk| {
            Row::with_children(chunk.iter().map(|item| self.card(*item, ctx)))
                .spacing(GRID_GAP)
                .into()
        });

        container(Column::with_children(rows).spacing(GRID_GAP))
            .center_x(Length::Fill)
            .into()
    }

    fn card<'a>(&'a self, item: &'a ShowcaseItem, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let id = item.id;
        let viewport: Element<'a, Message> = match self.card_viewer(id) {
            Some(viewer) => viewer
                .view(ctx.viewer())
                .map(move |message| Message::Viewer(ViewerSlot::Card(id), message)),
            None => Space::new()
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_VIEWER_HEIGHT)).into(),
        };

        let title = row![
            text(item.title.as_str())
                .size(typography::TITLE_SM)
                .width(Length::Fill),
            badge(item.category.to_string(), true),
        ]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

        let mut labels: Vec<Element<'a, Message>> = item
            .animations
            .iter()
            .take(CARD_ANIMATION_LIMIT)
            .map(|label| badge(label.clone(), false))
            .collect();
        if item.featured {
            labels.push(badge(ctx.i18n.tr("gallery-featured"), true));
        }

        let details = button(
            container(text(ctx.i18n.tr("gallery-view-details")).size(typography::BODY))
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .on_press(Message::OpenDetail(id))
        .style(styles::button::primary);

        let body = column![
            viewport,
            title,
            text(item.description.as_str())
                .size(typography::BODY)
                .style(styles::text::secondary)
                .height(Length::Fill),
            Row::with_children(labels).spacing(spacing::XXS).wrap(),
            details,
        ]
        .spacing(spacing::SM);

        container(body)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_HEIGHT))
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
    }

    /// Detail overlay for the selected item, if any.
    ///
    /// Presses on the dimmed backdrop publish [`OverlayRegion::Backdrop`];
    /// the panel is wrapped in `opaque` so presses inside it never reach the
    /// backdrop.
    pub fn view_overlay<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        let item = self.selected_item()?;
        let viewer = self.detail_viewer()?;

        let heading = row![
            text(item.title.as_str())
                .size(typography::TITLE_MD)
                .width(Length::Fill),
            badge(item.category.to_string(), true),
        ]
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

        let labels = Row::with_children(
            item.animations
                .iter()
                .map(|label| badge(label.clone(), false)),
        )
        .spacing(spacing::XXS)
        .wrap();

        let close = button(text(ctx.i18n.tr("gallery-close")).size(typography::BODY))
            .on_press(Message::CloseDetail)
            .style(styles::button::outline);

        let panel = column![
            heading,
            viewer
                .view(ctx.viewer())
                .map(|message| Message::Viewer(ViewerSlot::Detail, message)),
            text(item.description.as_str())
                .size(typography::BODY_LG)
                .style(styles::text::secondary),
            text(ctx.i18n.tr("gallery-animations-heading"))
                .size(typography::TITLE_SM)
                .style(styles::text::accent),
            labels,
            container(close)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        ]
        .spacing(spacing::MD);

        let panel = container(panel)
            .width(Length::Fixed(sizing::DETAIL_PANEL_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::overlay_panel);

        let panel = opaque(mouse_area(panel).on_press(Message::OverlayPressed(OverlayRegion::Panel)));

        let backdrop = container(panel)
            .center(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::backdrop);

        Some(
            mouse_area(backdrop)
                .on_press(Message::OverlayPressed(OverlayRegion::Backdrop))
                .into(),
        )
    }
}

fn chip<'a>(label: String, filter: CategoryFilter, active: &CategoryFilter) -> Element<'a, Message> {
    let selected = &filter == active;
    button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::SelectCategory(filter))
        .style(styles::button::chip(selected))
        .into()
}

fn badge<'a, M: 'a>(label: String, accent: bool) -> Element<'a, M> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(styles::container::badge(accent))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn default_window_fits_three_columns() {
        assert_eq!(columns_for_width(1280.0), 3);
    }

    #[test]
    fn narrow_window_falls_back_to_one_column() {
        assert_eq!(columns_for_width(500.0), 1);
        assert_eq!(columns_for_width(0.0), 1);
    }

    #[test]
    fn medium_window_fits_two_columns() {
        assert_eq!(columns_for_width(860.0), 2);
    }

    #[test]
    fn grid_height_counts_rows_and_gaps() {
        assert_abs_diff_eq!(grid_height(0, 3), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(grid_height(3, 3), sizing::CARD_HEIGHT, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            grid_height(4, 3),
            2.0 * sizing::CARD_HEIGHT + GRID_GAP,
            epsilon = F32_EPSILON
        );
        assert_abs_diff_eq!(
            grid_height(2, 0),
            2.0 * sizing::CARD_HEIGHT + GRID_GAP,
            epsilon = F32_EPSILON
        );
    }
}
