//! Household-move inventory domain module.
//!
//! This crate contains the item data model, the priority ordering policy and
//! the aggregation engine, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod aggregate;
pub mod item;
pub mod ordering;

pub use aggregate::{AggregateView, SeriesPoint, Totals};
pub use item::{Category, Draft, Item, ItemRecord, Priority};
pub use ordering::order_items;
