//! Standard test fixtures for consistent testing
//!
//! Provides pre-built test data including:
//! - Standard items with sensible defaults
//! - Edge case stock records
//! - Bulk item generators

use item_core::{Item, NewItem};

/// Create a basic test item with sensible defaults
pub fn create_test_item() -> Item {
    Item {
        id: 1,
        name: "Bolt M8".to_string(),
        quantity: 100,
        price: 0.5,
        supplier: "Acme Fasteners".to_string(),
    }
}

/// Create a standard candidate for create/update calls
pub fn create_new_item() -> NewItem {
    NewItem {
        name: "Bolt M8".to_string(),
        quantity: 100,
        price: 0.5,
        supplier: "Acme Fasteners".to_string(),
    }
}

/// Create an item that is out of stock
pub fn create_out_of_stock_item() -> Item {
    let mut item = create_test_item();
    item.name = "Hex Key 4mm".to_string();
    item.quantity = 0;
    item
}

/// Create multiple unique items
pub fn create_test_items(count: usize) -> Vec<Item> {
    (1..=count)
        .map(|i| Item {
            id: i as i64,
            name: format!("Part {i:03}"),
            quantity: (i as i64) * 10,
            price: i as f64 * 0.25,
            supplier: format!("Supplier {}", i % 3 + 1), // Distribute across 3 suppliers
        })
        .collect()
}

/// Create a small catalog of typical stock records
pub fn create_catalog() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Bolt M8".to_string(),
            quantity: 100,
            price: 0.5,
            supplier: "Acme Fasteners".to_string(),
        },
        Item {
            id: 2,
            name: "Washer M8".to_string(),
            quantity: 500,
            price: 0.05,
            supplier: "Acme Fasteners".to_string(),
        },
        Item {
            id: 3,
            name: "Hinge 40mm".to_string(),
            quantity: 40,
            price: 3.75,
            supplier: "Door Depot".to_string(),
        },
        Item {
            id: 4,
            name: "Wood Screw 30mm".to_string(),
            quantity: 0,
            price: 0.12,
            supplier: "Timber Trade".to_string(),
        },
    ]
}
