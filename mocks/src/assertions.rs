//! Custom assertion helpers for testing
//!
//! Provides specialized assertions for:
//! - Item equality with clear error messages
//! - Collection-based assertions over listings
//! - Flexible partial matching

use item_core::Item;

/// Assert items are equal field by field with clear error messages
pub fn assert_item_equals(actual: &Item, expected: &Item) {
    assert_eq!(actual.id, expected.id, "Item IDs don't match");
    assert_eq!(actual.name, expected.name, "Item names don't match");
    assert_eq!(
        actual.quantity, expected.quantity,
        "Item quantities don't match"
    );
    assert_eq!(actual.price, expected.price, "Item prices don't match");
    assert_eq!(
        actual.supplier, expected.supplier,
        "Item suppliers don't match"
    );
}

/// Assert item matches partial criteria
pub fn assert_item_matches(item: &Item, matcher: &ItemMatcher) {
    if let Some(expected_id) = matcher.id {
        assert_eq!(item.id, expected_id, "Item ID doesn't match expected");
    }
    if let Some(ref expected_name) = matcher.name {
        assert_eq!(item.name, *expected_name, "Item name doesn't match expected");
    }
    if let Some(expected_quantity) = matcher.quantity {
        assert_eq!(
            item.quantity, expected_quantity,
            "Item quantity doesn't match expected"
        );
    }
    if let Some(expected_price) = matcher.price {
        assert_eq!(item.price, expected_price, "Item price doesn't match expected");
    }
    if let Some(ref expected_supplier) = matcher.supplier {
        assert_eq!(
            item.supplier, *expected_supplier,
            "Item supplier doesn't match expected"
        );
    }
}

/// Assert item list contains an item with a specific ID
pub fn assert_contains_item_with_id(items: &[Item], id: i64) {
    assert!(
        items.iter().any(|i| i.id == id),
        "Expected to find item with ID {} in item list, but it wasn't found. Available IDs: {:?}",
        id,
        items.iter().map(|i| i.id).collect::<Vec<_>>()
    );
}

/// Assert every assigned ID in the list is unique
pub fn assert_ids_unique(items: &[Item]) {
    let mut ids: Vec<i64> = items.iter().map(|i| i.id).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(
        ids.len(),
        before,
        "Item IDs are not pairwise distinct: {:?}",
        items.iter().map(|i| i.id).collect::<Vec<_>>()
    );
}

/// Assert items are listed in ascending ID order
pub fn assert_items_sorted_by_id(items: &[Item]) {
    for window in items.windows(2) {
        assert!(
            window[0].id < window[1].id,
            "Items are not sorted by ascending ID. Item '{}' ({}) comes before '{}' ({})",
            window[0].name,
            window[0].id,
            window[1].name,
            window[1].id
        );
    }
}

/// Flexible item matcher for partial assertions
#[derive(Debug, Default)]
pub struct ItemMatcher {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub supplier: Option<String>,
}

impl ItemMatcher {
    /// Create a new empty matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Match items with specific ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Match items with specific name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Match items with specific quantity
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Match items with specific price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Match items with specific supplier
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }
}
