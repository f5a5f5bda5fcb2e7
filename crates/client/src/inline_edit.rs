//! Inline single-field edit session.
//!
//! At most one `(item, field)` pair is being edited at any time. Starting a
//! new edit implicitly discards any prior uncommitted one without writing
//! it; committing goes through the mutation coordinator's merged-update
//! path.

use serde::{Deserialize, Serialize};

use movinv_core::ItemId;
use movinv_inventory::{Category, Item, ItemRecord, Priority};

/// The editable fields of an item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Name,
    Price,
    Quantity,
    Category,
    Priority,
}

/// Typed pending value for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValue {
    Name(String),
    Price(i64),
    Quantity(u32),
    Category(Category),
    Priority(Priority),
}

impl FieldValue {
    /// The item's current value for the given field (the seed of a session).
    pub fn of(item: &Item, field: ItemField) -> Self {
        match field {
            ItemField::Name => FieldValue::Name(item.name.clone()),
            ItemField::Price => FieldValue::Price(item.price),
            ItemField::Quantity => FieldValue::Quantity(item.quantity),
            ItemField::Category => FieldValue::Category(item.category),
            ItemField::Priority => FieldValue::Priority(item.priority),
        }
    }

    pub fn field(&self) -> ItemField {
        match self {
            FieldValue::Name(_) => ItemField::Name,
            FieldValue::Price(_) => ItemField::Price,
            FieldValue::Quantity(_) => ItemField::Quantity,
            FieldValue::Category(_) => ItemField::Category,
            FieldValue::Priority(_) => ItemField::Priority,
        }
    }

    /// Overlay this single field on a full record (merged-update payload).
    pub fn apply_to(&self, record: &mut ItemRecord) {
        match self {
            FieldValue::Name(name) => record.name = name.clone(),
            FieldValue::Price(price) => record.price = *price,
            FieldValue::Quantity(quantity) => record.quantity = *quantity,
            FieldValue::Category(category) => record.category = *category,
            FieldValue::Priority(priority) => record.priority = *priority,
        }
    }
}

/// The session state machine: `Closed`, or `Editing` one field of one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineEditSession {
    #[default]
    Closed,
    Editing { item_id: ItemId, value: FieldValue },
}

impl InlineEditSession {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Start editing one field, seeded from the item's current value.
    ///
    /// Any prior uncommitted session is discarded here without a write.
    pub fn begin(&mut self, item: &Item, field: ItemField) {
        *self = InlineEditSession::Editing {
            item_id: item.id,
            value: FieldValue::of(item, field),
        };
    }

    /// Replace the pending value on user input. Ignored when the session is
    /// closed or the value targets a different field than the active one.
    pub fn set_pending(&mut self, pending: FieldValue) {
        if let InlineEditSession::Editing { value, .. } = self
            && value.field() == pending.field()
        {
            *value = pending;
        }
    }

    /// Close without writing.
    pub fn cancel(&mut self) {
        *self = InlineEditSession::Closed;
    }

    /// The "interaction left the editable region" signal from the
    /// presentation layer (e.g. focus moved elsewhere). Same as cancel.
    pub fn on_outside_interaction(&mut self) {
        self.cancel();
    }

    pub fn is_open(&self) -> bool {
        matches!(self, InlineEditSession::Editing { .. })
    }

    /// Whether this exact `(item, field)` pair is being edited.
    pub fn is_editing(&self, id: ItemId, field: ItemField) -> bool {
        matches!(
            self,
            InlineEditSession::Editing { item_id, value }
                if *item_id == id && value.field() == field
        )
    }

    pub fn pending(&self) -> Option<&FieldValue> {
        match self {
            InlineEditSession::Editing { value, .. } => Some(value),
            InlineEditSession::Closed => None,
        }
    }
}
