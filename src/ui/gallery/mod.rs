// SPDX-License-Identifier: MPL-2.0
//! Filterable portfolio gallery.
//!
//! The gallery is a small state machine over `{filter} x {selection}`.
//! Filtering never touches the selection, and the selected item always
//! belongs to the unfiltered catalog. Each card owns an independent viewer;
//! opening the detail overlay creates a fresh auto-rotating one.

mod state;
mod view;

pub use state::{
    filter_items, CategoryFilter, Effect, Message, OverlayRegion, State, ViewerSlot,
};
pub use view::{columns_for_width, grid_height, ViewContext, CARD_ANIMATION_LIMIT, GRID_GAP};
