use serde::{Deserialize, Serialize};

/// Core inventory item representation in the stockroom service.
///
/// An item is a single stock-keeping record: a label, how many units are
/// on hand, the unit price, and who supplies it. Each item has a unique
/// numeric ID assigned by the store on creation and never reused.
///
/// # Examples
///
/// ```rust
/// use item_core::models::Item;
///
/// let item = Item {
///     id: 42,
///     name: "Bolt M8".to_string(),
///     quantity: 100,
///     price: 0.5,
///     supplier: "Acme Fasteners".to_string(),
/// };
///
/// assert_eq!(item.id, 42);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Auto-increment primary key, assigned by the store
    pub id: i64,
    /// Human-readable item label
    pub name: String,
    /// Units currently on hand
    pub quantity: i64,
    /// Price per unit
    pub price: f64,
    /// Supplier label
    pub supplier: String,
}

impl Item {
    /// Build a stored item from a candidate and its assigned ID
    pub fn from_new(id: i64, candidate: NewItem) -> Self {
        Self {
            id,
            name: candidate.name,
            quantity: candidate.quantity,
            price: candidate.price,
            supplier: candidate.supplier,
        }
    }
}

/// Data transfer object for creating items and for wholesale field
/// replacement on update.
///
/// Updates overwrite every non-ID field at once; there are no partial
/// updates, so the same payload shape serves both operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    /// Human-readable item label
    pub name: String,
    /// Units currently on hand
    pub quantity: i64,
    /// Price per unit
    pub price: f64,
    /// Supplier label
    pub supplier: String,
}
