//! Builder pattern implementations for easy test data construction
//!
//! Provides fluent builders for:
//! - Item construction with sensible defaults
//! - NewItem candidates for create and update calls

use item_core::{Item, NewItem};

/// Builder for constructing Item instances in tests
pub struct ItemBuilder {
    item: Item,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            item: Item {
                id: 1,
                name: "Test Item".to_string(),
                quantity: 10,
                price: 1.0,
                supplier: "Test Supplier".to_string(),
            },
        }
    }

    /// Set item ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.item.id = id;
        self
    }

    /// Set item name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.item.name = name.into();
        self
    }

    /// Set stock quantity
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.item.quantity = quantity;
        self
    }

    /// Set unit price
    pub fn with_price(mut self, price: f64) -> Self {
        self.item.price = price;
        self
    }

    /// Set supplier label
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.item.supplier = supplier.into();
        self
    }

    /// Build the final Item
    pub fn build(self) -> Item {
        self.item
    }
}

/// Builder for constructing NewItem instances in tests
///
/// The same payload shape drives both create and update calls, so this
/// builder covers both.
pub struct NewItemBuilder {
    new_item: NewItem,
}

impl Default for NewItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewItemBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            new_item: NewItem {
                name: "New Test Item".to_string(),
                quantity: 10,
                price: 1.0,
                supplier: "Test Supplier".to_string(),
            },
        }
    }

    /// Set item name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.new_item.name = name.into();
        self
    }

    /// Set stock quantity
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.new_item.quantity = quantity;
        self
    }

    /// Set unit price
    pub fn with_price(mut self, price: f64) -> Self {
        self.new_item.price = price;
        self
    }

    /// Set supplier label
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.new_item.supplier = supplier.into();
        self
    }

    /// Build the final NewItem
    pub fn build(self) -> NewItem {
        self.new_item
    }
}
