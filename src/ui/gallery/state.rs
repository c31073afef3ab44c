// SPDX-License-Identifier: MPL-2.0
//! Gallery state: category filter, detail selection and per-card viewers.

use crate::config::ViewerConfig;
use crate::content::{AssetRef, Category, ContentStore, ItemId, ShowcaseItem};
use crate::ui::design_tokens::sizing;
use crate::ui::viewer::{self, ViewerOptions};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Which items the grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, item: &ShowcaseItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &item.category == category,
        }
    }
}

/// Where a press on the detail overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRegion {
    /// The dimmed area around the panel.
    Backdrop,
    /// Anywhere inside the detail panel.
    Panel,
}

/// Addresses one of the gallery's viewer instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerSlot {
    Card(ItemId),
    Detail,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectCategory(CategoryFilter),
    OpenDetail(ItemId),
    CloseDetail,
    OverlayPressed(OverlayRegion),
    Viewer(ViewerSlot, viewer::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Resolve `AssetRef` for the viewer in `ViewerSlot`.
    LoadAsset(ViewerSlot, AssetRef),
    /// Cards shown again by a filter change, each with a fresh viewer.
    LoadCards(Vec<(ViewerSlot, AssetRef)>),
}

/// Items of `items` accepted by `filter`, in their original order.
#[must_use]
pub fn filter_items<'a>(items: &'a [ShowcaseItem], filter: &CategoryFilter) -> Vec<&'a ShowcaseItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

pub struct State {
    store: Arc<ContentStore>,
    viewer_config: ViewerConfig,
    filter: CategoryFilter,
    selected: Option<ItemId>,
    cards: HashMap<ItemId, viewer::State>,
    detail: Option<viewer::State>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("filter", &self.filter)
            .field("selected", &self.selected)
            .field("cards", &self.cards.len())
            .field("detail_open", &self.detail.is_some())
            .finish()
    }
}

impl State {
    /// Starts unfiltered with nothing selected and one viewer per item.
    #[must_use]
    pub fn new(store: Arc<ContentStore>, viewer_config: &ViewerConfig) -> Self {
        let mut state = Self {
            store,
            viewer_config: viewer_config.clone(),
            filter: CategoryFilter::All,
            selected: None,
            cards: HashMap::new(),
            detail: None,
        };
        state.mount_visible_cards();
        state
    }

    /// Loads every card viewer needs at startup.
    #[must_use]
    pub fn initial_loads(&self) -> Vec<(ViewerSlot, AssetRef)> {
        self.visible_items()
            .into_iter()
            .map(|item| (ViewerSlot::Card(item.id), item.asset_ref.clone()))
            .collect()
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SelectCategory(filter) => match self.select_category(filter) {
                Some(loads) if !loads.is_empty() => Effect::LoadCards(loads),
                _ => Effect::None,
            },
            Message::OpenDetail(id) => match self.open_detail(id) {
                Some(asset) => Effect::LoadAsset(ViewerSlot::Detail, asset),
                None => Effect::None,
            },
            Message::CloseDetail => {
                self.close_detail();
                Effect::None
            }
            Message::OverlayPressed(region) => {
                self.overlay_pressed(region);
                Effect::None
            }
            Message::Viewer(slot, message) => self.route_viewer(slot, message),
        }
    }

    /// Sets the filter; selection is untouched. Categories absent from the
    /// store are rejected with `None`.
    ///
    /// Cards hidden by the new filter lose their viewer. Cards that become
    /// visible get a fresh one; the returned loads resolve their assets.
    pub fn select_category(
        &mut self,
        filter: CategoryFilter,
    ) -> Option<Vec<(ViewerSlot, AssetRef)>> {
        if let CategoryFilter::Only(category) = &filter {
            if !self.store.has_category(category) {
                log::warn!("ignoring unknown category {:?}", category.as_str());
                return None;
            }
        }
        log::debug!("gallery filter {:?}", filter);
        self.filter = filter;
        Some(self.mount_visible_cards())
    }

    /// Keeps exactly one viewer per visible card.
    fn mount_visible_cards(&mut self) -> Vec<(ViewerSlot, AssetRef)> {
        let store = Arc::clone(&self.store);
        let visible = filter_items(store.list_items(), &self.filter);

        self.cards
            .retain(|id, _| visible.iter().any(|item| item.id == *id));

        let mut loads = Vec::new();
        for item in visible {
            if self.cards.contains_key(&item.id) {
                continue;
            }
            let options = ViewerOptions {
                auto_rotate: false,
                show_controls: true,
                title: None,
                height: sizing::CARD_VIEWER_HEIGHT,
            };
            let viewer = viewer::State::new(item.asset_ref.clone(), options, &self.viewer_config);
            self.cards.insert(item.id, viewer);
            loads.push((ViewerSlot::Card(item.id), item.asset_ref.clone()));
        }
        loads
    }

    /// Selects `id` and creates a fresh auto-rotating detail viewer.
    /// Returns the asset the new viewer must load.
    pub fn open_detail(&mut self, id: ItemId) -> Option<AssetRef> {
        let Some(item) = self.store.get(id) else {
            log::warn!("ignoring unknown item {}", id);
            return None;
        };

        let options = ViewerOptions {
            auto_rotate: true,
            show_controls: true,
            title: Some(item.title.clone()),
            height: sizing::DETAIL_VIEWER_HEIGHT,
        };
        let asset = item.asset_ref.clone();
        self.detail = Some(viewer::State::new(
            asset.clone(),
            options,
            &self.viewer_config,
        ));
        self.selected = Some(id);
        log::debug!("opened detail for {}", id);
        Some(asset)
    }

    pub fn close_detail(&mut self) {
        if self.selected.take().is_some() {
            log::debug!("closed detail");
        }
        self.detail = None;
    }

    /// Only presses on the backdrop close the overlay.
    pub fn overlay_pressed(&mut self, region: OverlayRegion) {
        match region {
            OverlayRegion::Backdrop => self.close_detail(),
            OverlayRegion::Panel => {}
        }
    }

    fn route_viewer(&mut self, slot: ViewerSlot, message: viewer::Message) -> Effect {
        let viewer = match slot {
            ViewerSlot::Card(id) => self.cards.get_mut(&id),
            ViewerSlot::Detail => self.detail.as_mut(),
        };
        let Some(viewer) = viewer else {
            log::debug!("dropping message for closed viewer {:?}", slot);
            return Effect::None;
        };

        match viewer.handle(message) {
            viewer::Effect::None => Effect::None,
            viewer::Effect::LoadAsset(asset) => Effect::LoadAsset(slot, asset),
        }
    }

    /// Advances every viewer that is on screen.
    pub fn tick(&mut self, delta: f32) {
        for card in self.cards.values_mut() {
            card.tick(delta);
        }
        if let Some(detail) = &mut self.detail {
            detail.tick(delta);
        }
    }

    #[must_use]
    pub fn needs_frames(&self) -> bool {
        let cards = self.cards.values().any(viewer::State::needs_frames);
        cards || self.detail.as_ref().is_some_and(viewer::State::needs_frames)
    }

    #[must_use]
    pub fn visible_items(&self) -> Vec<&ShowcaseItem> {
        filter_items(self.store.list_items(), &self.filter)
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&ShowcaseItem> {
        self.selected.and_then(|id| self.store.get(id))
    }

    #[must_use]
    pub fn card_viewer(&self, id: ItemId) -> Option<&viewer::State> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn detail_viewer(&self) -> Option<&viewer::State> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &ContentStore {
        &self.store
    }
}
