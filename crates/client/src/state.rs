//! Single-owner application state snapshot.

use movinv_core::ItemId;
use movinv_inventory::{AggregateView, Item, order_items};

/// The last successfully fetched-and-reordered item list plus everything
/// derived from it.
///
/// This is the only list the presentation layer ever sees: mutations are
/// never applied to it optimistically, it is wholly replaced by
/// [`AppState::ingest`] after each successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    items: Vec<Item>,
    view: AggregateView,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot: apply the ordering policy, then re-derive the
    /// aggregate views from scratch.
    pub fn ingest(&mut self, mut items: Vec<Item>) {
        order_items(&mut items);
        self.view = AggregateView::derive(&items);
        self.items = items;
    }

    /// The ordered item list (default presentation order).
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The derived aggregate views.
    pub fn view(&self) -> &AggregateView {
        &self.view
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}
