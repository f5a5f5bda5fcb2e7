//! `movinv-client` — the client-side inventory view-model.
//!
//! Mediates all mutations against the remote item store and keeps the local
//! snapshot consistent through a strict refetch-after-write policy: every
//! successful write is followed by a full `list()`, re-ordering and
//! re-derivation before the presentation layer sees anything. Nothing is
//! applied optimistically, so the displayed list can lag the store by at
//! most one round trip but can never diverge from it.

pub mod config;
pub mod coordinator;
pub mod http;
pub mod inline_edit;
pub mod memory;
pub mod state;
pub mod store;

pub use config::ClientConfig;
pub use coordinator::{MutationCoordinator, Phase, SubmitOutcome};
pub use http::HttpItemStore;
pub use inline_edit::{FieldValue, InlineEditSession, ItemField};
pub use memory::MemoryItemStore;
pub use state::AppState;
pub use store::{ItemStore, StoreError};
