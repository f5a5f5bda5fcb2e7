//! In-process item store, mainly for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use movinv_core::ItemId;
use movinv_inventory::{Item, ItemRecord};

use crate::store::{ItemStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    /// When set, the next store call fails with a network error and the
    /// flag clears. Lets tests exercise the remote-failure paths.
    fail_next: bool,
    calls: usize,
}

/// Mutex-guarded in-memory [`ItemStore`] with failure injection.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    inner: Mutex<Inner>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store; ids are assigned here, as the remote store would.
    pub fn with_items(records: Vec<ItemRecord>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().expect("store mutex poisoned");
            for record in records {
                inner.items.push(materialize(ItemId::new(), &record));
            }
        }
        store
    }

    /// Make the next store call (any operation) fail.
    pub fn fail_next_call(&self) {
        self.inner.lock().expect("store mutex poisoned").fail_next = true;
    }

    /// Number of store calls attempted so far (including failed ones).
    pub fn call_count(&self) -> usize {
        self.inner.lock().expect("store mutex poisoned").calls
    }

    fn begin_call(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.calls += 1;
        if inner.fail_next {
            inner.fail_next = false;
            return Err(StoreError::Network("injected failure".to_string()));
        }
        Ok(inner)
    }
}

fn materialize(id: ItemId, record: &ItemRecord) -> Item {
    Item {
        id,
        name: record.name.clone(),
        price: record.price,
        quantity: record.quantity,
        category: record.category,
        priority: record.priority,
        purchased: record.purchased,
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let inner = self.begin_call()?;
        Ok(inner.items.clone())
    }

    async fn create(&self, record: &ItemRecord) -> Result<Item, StoreError> {
        let mut inner = self.begin_call()?;
        let item = materialize(ItemId::new(), record);
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: ItemId, record: &ItemRecord) -> Result<Item, StoreError> {
        let mut inner = self.begin_call()?;
        let slot = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::Api(404, format!("no item {id}")))?;
        *slot = materialize(id, record);
        Ok(slot.clone())
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let mut inner = self.begin_call()?;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        if inner.items.len() == before {
            return Err(StoreError::Api(404, format!("no item {id}")));
        }
        Ok(())
    }
}
