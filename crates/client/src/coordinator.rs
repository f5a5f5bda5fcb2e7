//! Mutation coordinator: sequences writes against the store and keeps the
//! snapshot consistent.
//!
//! All mutating methods take `&mut self`, so in-flight mutations are
//! serialized by the borrow — a second request queues behind the first
//! instead of racing it. Suspension happens only at the store boundary; an
//! in-flight call is never cancelled.

use serde::{Deserialize, Serialize};

use movinv_core::ItemId;
use movinv_inventory::{Draft, Item, ItemRecord};

use crate::inline_edit::InlineEditSession;
use crate::state::AppState;
use crate::store::{ItemStore, StoreError};

/// Coordinator phase. `Submitting` covers the window between dispatching a
/// remote write and completing the post-write refetch.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// What `submit` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// Written, refetched, draft cleared.
    Saved,
    /// The draft failed the validation gate: no remote call was made and
    /// the draft stays open. Deliberately not an error — the caller detects
    /// it from this outcome (and the still-populated draft).
    Rejected,
}

/// Owns the application state, the form draft and the editing target, and
/// mediates every mutation against the item store.
///
/// Postcondition of every successful mutation: a full `list()` refetch,
/// re-ordering and re-derivation. On failure the snapshot, the draft and
/// the editing id are exactly as they were before the attempt.
#[derive(Debug)]
pub struct MutationCoordinator<S: ItemStore> {
    store: S,
    state: AppState,
    draft: Draft,
    editing: Option<ItemId>,
    phase: Phase,
}

impl<S: ItemStore> MutationCoordinator<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: AppState::new(),
            draft: Draft::default(),
            editing: None,
            phase: Phase::Idle,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Form field edits mutate the draft in place.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// The item the draft was populated from, if submit should update
    /// rather than create.
    pub fn editing_id(&self) -> Option<ItemId> {
        self.editing
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fetch the authoritative list and rebuild the snapshot. Used for the
    /// initial load and by every post-write path.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        let items = self.store.list().await.inspect_err(|err| {
            tracing::warn!(%err, "item list fetch failed");
        })?;
        self.state.ingest(items);
        Ok(())
    }

    /// Copy an item's fields (minus id) into the draft and mark it as the
    /// editing target. Calling this again, for any item, replaces the draft
    /// wholesale — the prior in-progress edit is discarded without a write.
    pub fn begin_edit(&mut self, item: &Item) {
        self.draft = Draft::from_item(item);
        self.editing = Some(item.id);
    }

    /// Discard the draft and the editing target.
    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
        self.editing = None;
    }

    /// Validate the draft and, if it passes the gate, create or update.
    ///
    /// On success the draft and editing id are cleared. On a store failure
    /// both are left untouched and the error is surfaced so the user can
    /// retry.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, StoreError> {
        let record = match self.draft.validate() {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!(%err, "draft rejected by the submission gate");
                return Ok(SubmitOutcome::Rejected);
            }
        };

        self.phase = Phase::Submitting;
        let written = match self.editing {
            Some(id) => {
                tracing::debug!(%id, "updating item");
                self.store.update(id, &record).await.map(|_| ())
            }
            None => {
                tracing::debug!(name = %record.name, "creating item");
                self.store.create(&record).await.map(|_| ())
            }
        };

        let result = match written {
            Ok(()) => self.refresh().await,
            Err(err) => Err(err),
        };
        self.phase = Phase::Idle;
        match result {
            Ok(()) => {
                self.reset_draft();
                Ok(SubmitOutcome::Saved)
            }
            Err(err) => {
                tracing::warn!(%err, "submit failed; draft left open for retry");
                Err(err)
            }
        }
    }

    /// Flip `purchased` on one item, sent as the full merged record. No
    /// optimistic flip: the change only becomes visible through the
    /// refetched list.
    pub async fn toggle(&mut self, item: &Item) -> Result<(), StoreError> {
        let mut record = item.record();
        record.purchased = !record.purchased;
        tracing::debug!(id = %item.id, purchased = record.purchased, "toggling item status");
        self.write_then_refresh(item.id, record).await
    }

    /// Delete one item, then refetch.
    pub async fn remove(&mut self, id: ItemId) -> Result<(), StoreError> {
        self.phase = Phase::Submitting;
        tracing::debug!(%id, "deleting item");
        let result = match self.store.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => Err(err),
        };
        self.phase = Phase::Idle;
        result.inspect_err(|err| {
            tracing::warn!(%err, %id, "delete failed");
        })
    }

    /// Commit an inline-edit session: overlay the pending field on the
    /// item's current record and send the merged update. The session closes
    /// on success and stays open on failure so the user can retry or
    /// cancel.
    pub async fn commit_inline(
        &mut self,
        session: &mut InlineEditSession,
    ) -> Result<(), StoreError> {
        let InlineEditSession::Editing { item_id, value } = session.clone() else {
            return Ok(());
        };
        let Some(item) = self.state.item(item_id) else {
            // The item vanished from the snapshot (deleted elsewhere);
            // nothing to write against.
            tracing::debug!(%item_id, "inline edit target no longer in snapshot");
            session.cancel();
            return Ok(());
        };

        let mut record = item.record();
        value.apply_to(&mut record);
        tracing::debug!(%item_id, field = ?value.field(), "committing inline edit");
        self.write_then_refresh(item_id, record).await?;
        session.cancel();
        Ok(())
    }

    async fn write_then_refresh(
        &mut self,
        id: ItemId,
        record: ItemRecord,
    ) -> Result<(), StoreError> {
        self.phase = Phase::Submitting;
        let result = match self.store.update(id, &record).await {
            Ok(_) => self.refresh().await,
            Err(err) => Err(err),
        };
        self.phase = Phase::Idle;
        result.inspect_err(|err| {
            tracing::warn!(%err, %id, "update failed; view left unchanged");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline_edit::{FieldValue, ItemField};
    use crate::memory::MemoryItemStore;
    use movinv_inventory::{Category, ItemRecord, Priority};

    fn record(name: &str, price: i64, priority: Priority, purchased: bool) -> ItemRecord {
        ItemRecord {
            name: name.to_string(),
            price,
            quantity: 1,
            category: Category::Furniture,
            priority,
            purchased,
        }
    }

    fn seeded() -> MutationCoordinator<MemoryItemStore> {
        MutationCoordinator::new(MemoryItemStore::with_items(vec![
            record("Wardrobe", 30_000, Priority::Low, false),
            record("Mattress", 12_000, Priority::VeryHigh, false),
        ]))
    }

    #[tokio::test]
    async fn refresh_orders_the_snapshot_by_priority() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let names: Vec<&str> = coordinator
            .state()
            .items()
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Mattress", "Wardrobe"]);
    }

    #[tokio::test]
    async fn submit_creates_then_refetches_and_clears_the_draft() {
        let mut coordinator = MutationCoordinator::new(MemoryItemStore::new());
        let draft = coordinator.draft_mut();
        draft.name = "Kettle".to_string();
        draft.price = 1_200;
        draft.category = Some(Category::Kitchen);

        let outcome = coordinator.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(coordinator.state().items().len(), 1);
        assert_eq!(coordinator.state().view().totals.total, 1_200);
        assert_eq!(coordinator.draft(), &Draft::default());
        assert_eq!(coordinator.editing_id(), None);
        assert_eq!(coordinator.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn submit_with_zero_price_is_a_silent_no_op() {
        let mut coordinator = MutationCoordinator::new(MemoryItemStore::new());
        let draft = coordinator.draft_mut();
        draft.name = "Kettle".to_string();
        draft.price = 0;
        draft.category = Some(Category::Kitchen);

        let outcome = coordinator.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected);
        // No remote call of any kind was made and the draft is still open.
        assert_eq!(coordinator.store.call_count(), 0);
        assert_eq!(coordinator.draft().name, "Kettle");
    }

    #[tokio::test]
    async fn begin_edit_twice_keeps_only_the_second_draft() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let a = coordinator.state().items()[0].clone();
        let b = coordinator.state().items()[1].clone();
        let calls_before = coordinator.store.call_count();

        coordinator.begin_edit(&a);
        coordinator.draft_mut().name = "renamed".to_string();
        coordinator.begin_edit(&b);

        assert_eq!(coordinator.editing_id(), Some(b.id));
        assert_eq!(coordinator.draft().name, b.name);
        // The discarded edit of `a` never produced a write.
        assert_eq!(coordinator.store.call_count(), calls_before);
    }

    #[tokio::test]
    async fn submit_in_edit_mode_updates_the_existing_item() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let target = coordinator.state().items()[0].clone();

        coordinator.begin_edit(&target);
        coordinator.draft_mut().price = 9_999;
        let outcome = coordinator.submit().await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(coordinator.state().items().len(), 2);
        assert_eq!(coordinator.state().item(target.id).unwrap().price, 9_999);
        assert_eq!(coordinator.editing_id(), None);
    }

    #[tokio::test]
    async fn submit_failure_keeps_the_draft_and_editing_id() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let target = coordinator.state().items()[0].clone();
        coordinator.begin_edit(&target);
        coordinator.draft_mut().price = 9_999;

        coordinator.store.fail_next_call();
        let err = coordinator.submit().await.unwrap_err();
        assert!(matches!(err, StoreError::Network(_)));
        assert_eq!(coordinator.editing_id(), Some(target.id));
        assert_eq!(coordinator.draft().price, 9_999);
        // The snapshot was not touched either.
        assert_eq!(coordinator.state().item(target.id).unwrap().price, target.price);
    }

    #[tokio::test]
    async fn toggle_flips_purchased_through_the_refetched_list() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let target = coordinator.state().items()[0].clone();
        assert!(!target.purchased);

        coordinator.toggle(&target).await.unwrap();
        assert!(coordinator.state().item(target.id).unwrap().purchased);
        assert_eq!(coordinator.state().view().totals.spent, 12_000);
    }

    #[tokio::test]
    async fn toggle_failure_leaves_purchased_unchanged() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let target = coordinator.state().items()[0].clone();

        coordinator.store.fail_next_call();
        coordinator.toggle(&target).await.unwrap_err();
        coordinator.refresh().await.unwrap();
        assert!(!coordinator.state().item(target.id).unwrap().purchased);
        assert_eq!(coordinator.state().view().totals.spent, 0);
    }

    #[tokio::test]
    async fn remove_deletes_and_refetches() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let target = coordinator.state().items()[0].clone();

        coordinator.remove(target.id).await.unwrap();
        assert_eq!(coordinator.state().items().len(), 1);
        assert!(coordinator.state().item(target.id).is_none());
    }

    #[tokio::test]
    async fn commit_inline_writes_the_merged_record_and_closes_the_session() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let target = coordinator.state().items()[0].clone();

        let mut session = InlineEditSession::new();
        session.begin(&target, ItemField::Price);
        session.set_pending(FieldValue::Price(11_000));

        coordinator.commit_inline(&mut session).await.unwrap();
        assert!(!session.is_open());
        let updated = coordinator.state().item(target.id).unwrap();
        assert_eq!(updated.price, 11_000);
        // Only the edited field changed; the rest of the record came along
        // merged, not defaulted.
        assert_eq!(updated.name, target.name);
        assert_eq!(updated.priority, target.priority);
    }

    #[tokio::test]
    async fn commit_inline_failure_leaves_the_session_open() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let target = coordinator.state().items()[0].clone();

        let mut session = InlineEditSession::new();
        session.begin(&target, ItemField::Name);
        session.set_pending(FieldValue::Name("Bigger wardrobe".to_string()));

        coordinator.store.fail_next_call();
        coordinator.commit_inline(&mut session).await.unwrap_err();
        assert!(session.is_editing(target.id, ItemField::Name));
        coordinator.refresh().await.unwrap();
        assert_eq!(coordinator.state().item(target.id).unwrap().name, target.name);
    }

    #[tokio::test]
    async fn commit_inline_with_a_closed_session_is_a_no_op() {
        let mut coordinator = seeded();
        coordinator.refresh().await.unwrap();
        let calls_before = coordinator.store.call_count();

        let mut session = InlineEditSession::new();
        coordinator.commit_inline(&mut session).await.unwrap();
        assert_eq!(coordinator.store.call_count(), calls_before);
    }
}
