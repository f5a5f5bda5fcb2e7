//! Default presentation order for the item list.

use crate::item::Item;

/// Stable-sort items by priority rank, ascending: `very high` (rank 0)
/// first, `very low` (rank 4) last.
///
/// The direction is declared here on purpose — the reversed order is a
/// valid alternative configuration but must never be inferred. Items with
/// equal priority keep their relative order from the source list.
///
/// Applied exactly once, immediately after every successful `list()` fetch,
/// before aggregation.
pub fn order_items(items: &mut [Item]) {
    items.sort_by_key(|item| item.priority.rank());
}
