//! Remote item store contract — the sole I/O boundary of the view-model.

use async_trait::async_trait;

use movinv_core::ItemId;
use movinv_inventory::{Item, ItemRecord};

/// Failure of a store operation.
///
/// The client never retries on its own; errors propagate to the mutation
/// coordinator, which leaves the relevant transient state (draft or
/// inline-edit session) open so the user can retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("store error ({0}): {1}")]
    Api(u16, String),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Remote CRUD over the single item collection.
///
/// Each call is one remote round trip. `update` always carries the full
/// merged record, never a partial patch — the store replaces on write.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch the full authoritative item list.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Create one item; the store assigns the id.
    async fn create(&self, record: &ItemRecord) -> Result<Item, StoreError>;

    /// Replace the item with the given id by the full merged record.
    async fn update(&self, id: ItemId, record: &ItemRecord) -> Result<Item, StoreError>;

    /// Delete the item with the given id.
    async fn delete(&self, id: ItemId) -> Result<(), StoreError>;
}
