use serde::{Deserialize, Serialize};

use movinv_core::{DomainError, DomainResult, ItemId};

/// Closed set of item categories.
///
/// A wire value outside this set is a deserialization error, never a silent
/// fallback to `Other`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Furniture,
    Electronics,
    Kitchen,
    Clothing,
    Other,
}

impl Category {
    /// All members, in declaration order (used for chart series).
    pub const ALL: [Category; 5] = [
        Category::Furniture,
        Category::Electronics,
        Category::Kitchen,
        Category::Clothing,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Furniture => "Furniture",
            Category::Electronics => "Electronics",
            Category::Kitchen => "Kitchen",
            Category::Clothing => "Clothing",
            Category::Other => "Other",
        }
    }
}

/// Closed, totally ordered set of item priorities.
///
/// The declaration order IS the rank table: `very high` = 0 through
/// `very low` = 4. The derived `Ord` therefore sorts most urgent first;
/// see [`crate::ordering`] for where the direction is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "very high")]
    VeryHigh,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "very low")]
    VeryLow,
}

impl Priority {
    /// All members, in rank order (used for chart series).
    pub const ALL: [Priority; 5] = [
        Priority::VeryHigh,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::VeryLow,
    ];

    /// Explicit tie-break rank: `very high` = 0 … `very low` = 4.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::VeryHigh => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
            Priority::VeryLow => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::VeryHigh => "very high",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::VeryLow => "very low",
        }
    }
}

fn default_quantity() -> u32 {
    1
}

/// One inventory record, as owned by the remote store.
///
/// The client only ever holds a cached copy; `id` is assigned by the store
/// on creation and immutable afterwards. `price` is in currency minor units
/// and never negative; `quantity` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: i64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub category: Category,
    pub priority: Priority,
    #[serde(default)]
    pub purchased: bool,
}

impl Item {
    /// Project onto the id-less wire record.
    ///
    /// This is the payload shape for `create` and the base for the merged
    /// `update` payload (the store replaces on write, so updates always
    /// carry the full record).
    pub fn record(&self) -> ItemRecord {
        ItemRecord {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
            category: self.category,
            priority: self.priority,
            purchased: self.purchased,
        }
    }

    /// Quantity-weighted value of this line: `price * quantity`.
    pub fn line_value(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

/// Full item record minus `id` — the wire payload for create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub price: i64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub category: Category,
    pub priority: Priority,
    #[serde(default)]
    pub purchased: bool,
}

/// In-progress add/edit form buffer.
///
/// Same shape as [`ItemRecord`] but partial: the category starts unset and
/// the name empty. Lives from first user input until a successful submit or
/// an explicit reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub price: i64,
    pub quantity: u32,
    pub category: Option<Category>,
    pub priority: Priority,
    pub purchased: bool,
}

impl Default for Draft {
    /// The reset form state: empty name, zero price, quantity 1, no
    /// category, medium priority, not purchased.
    fn default() -> Self {
        Self {
            name: String::new(),
            price: 0,
            quantity: 1,
            category: None,
            priority: Priority::Medium,
            purchased: false,
        }
    }
}

impl Draft {
    /// Populate the draft from an existing item (edit mode).
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            category: Some(item.category),
            priority: item.priority,
            purchased: item.purchased,
        }
    }

    /// The submission gate: name non-empty, price strictly positive,
    /// category chosen. A draft that fails the gate is not submitted; the
    /// coordinator treats the error as a silent no-op and leaves the draft
    /// open.
    pub fn validate(&self) -> DomainResult<ItemRecord> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("item name must not be empty"));
        }
        if self.price <= 0 {
            return Err(DomainError::validation("item price must be positive"));
        }
        let Some(category) = self.category else {
            return Err(DomainError::validation("item category must be chosen"));
        };
        Ok(ItemRecord {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity.max(1),
            category,
            priority: self.priority,
            purchased: self.purchased,
        })
    }
}
