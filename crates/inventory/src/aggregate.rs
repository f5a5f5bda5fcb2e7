//! Aggregation engine: derived summary views over the current item list.
//!
//! Everything here is a pure function of the ordered item list — no hidden
//! state, no memory across refetches. The whole view is recomputed from
//! scratch on every list change; there is no incremental update path.
//!
//! Per-item value policy: **quantity-weighted** (`price * quantity`),
//! applied uniformly to category totals, priority totals, chart series and
//! the running totals. Mixing bare and weighted sums per metric is the
//! inconsistency this module exists to rule out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::{Category, Item, Priority};

/// One chart data point: item name and its quantity-weighted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: i64,
}

/// Running totals over the whole list.
///
/// `spent` sums purchased items; `remaining = total - spent`. Values are
/// unrounded minor-unit sums — display formatting is a presentation
/// concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total: i64,
    pub spent: i64,
    pub remaining: i64,
}

/// All derived views handed to the presentation layer.
///
/// The totals maps are sparse: a category or priority with no items does
/// not appear at all (no zero-filled members). The series vectors preserve
/// order — per-item in list order, per-category/per-priority in enum order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateView {
    pub category_totals: BTreeMap<Category, i64>,
    pub priority_totals: BTreeMap<Priority, i64>,
    pub per_item_series: Vec<SeriesPoint>,
    pub category_series: Vec<(Category, i64)>,
    pub priority_series: Vec<(Priority, i64)>,
    pub totals: Totals,
}

impl AggregateView {
    /// Derive every summary view from the current (already ordered) list.
    ///
    /// An empty list yields zero totals and empty maps/series, never an
    /// error.
    pub fn derive(items: &[Item]) -> Self {
        let mut category_totals: BTreeMap<Category, i64> = BTreeMap::new();
        let mut priority_totals: BTreeMap<Priority, i64> = BTreeMap::new();
        let mut per_item_series = Vec::with_capacity(items.len());
        let mut totals = Totals::default();

        for item in items {
            let value = item.line_value();
            *category_totals.entry(item.category).or_insert(0) += value;
            *priority_totals.entry(item.priority).or_insert(0) += value;
            per_item_series.push(SeriesPoint {
                name: item.name.clone(),
                value,
            });
            totals.total += value;
            if item.purchased {
                totals.spent += value;
            }
        }
        totals.remaining = totals.total - totals.spent;

        // BTreeMap iteration already follows enum declaration order, which
        // is the chart order.
        let category_series = category_totals.iter().map(|(c, v)| (*c, *v)).collect();
        let priority_series = priority_totals.iter().map(|(p, v)| (*p, *v)).collect();

        Self {
            category_totals,
            priority_totals,
            per_item_series,
            category_series,
            priority_series,
            totals,
        }
    }
}
