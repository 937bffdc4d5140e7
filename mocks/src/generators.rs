//! Random test data generators using the fake crate
//!
//! Provides realistic random data including:
//! - Item and supplier names drawn from realistic pools
//! - Random stock records
//! - Property-based testing strategies

use fake::Fake;
use item_core::{Item, NewItem};
use proptest::prelude::*;
use rand::Rng;

/// Generate a realistic item name (e.g., "Bolt M8", "Hinge 40mm")
pub fn generate_item_name() -> String {
    let parts = [
        "Bolt", "Nut", "Washer", "Screw", "Hinge", "Bracket", "Gasket", "Rivet", "Dowel", "Clamp",
    ];
    let part = parts[rand::thread_rng().gen_range(0..parts.len())];
    let size: u32 = (3..24).fake();
    format!("{part} M{size}")
}

/// Generate a realistic supplier name
pub fn generate_supplier_name() -> String {
    let suppliers = [
        "Acme Fasteners",
        "Door Depot",
        "Timber Trade",
        "Bolt Barn",
        "Ironmonger & Sons",
        "Precision Parts Co",
        "Northside Hardware",
    ];
    suppliers[rand::thread_rng().gen_range(0..suppliers.len())].to_string()
}

/// Generate a random candidate with realistic data
pub fn generate_random_new_item() -> NewItem {
    let cents: u32 = (1..100_000).fake();
    NewItem {
        name: generate_item_name(),
        quantity: (0..10_000i64).fake(),
        price: cents as f64 / 100.0,
        supplier: generate_supplier_name(),
    }
}

/// Generate a random stored item with realistic data
pub fn generate_random_item() -> Item {
    let id: u32 = (1..99999).fake();
    Item::from_new(id as i64, generate_random_new_item())
}

/// Configurable item generator
pub struct ItemGenerator {
    pub supplier_pool: Vec<String>,
}

impl Default for ItemGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemGenerator {
    /// Create new generator with default settings
    pub fn new() -> Self {
        Self {
            supplier_pool: vec![
                "Supplier 1".to_string(),
                "Supplier 2".to_string(),
                "Supplier 3".to_string(),
            ],
        }
    }

    /// Generate an item with this generator's settings
    pub fn generate(&self) -> Item {
        let id: u32 = (1..99999).fake();
        let supplier = &self.supplier_pool[rand::thread_rng().gen_range(0..self.supplier_pool.len())];

        Item {
            id: id as i64,
            name: generate_item_name(),
            quantity: (0..10_000i64).fake(),
            price: ((1..100_000u32).fake::<u32>()) as f64 / 100.0,
            supplier: supplier.clone(),
        }
    }
}

/// Proptest strategy for generating item names
pub fn item_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{2,40}"
}

/// Proptest strategy for generating candidates
///
/// Prices are whole cents so comparisons stay exact through storage.
pub fn new_item_strategy() -> impl Strategy<Value = NewItem> {
    (
        item_name_strategy(),
        0i64..100_000,
        0u32..1_000_000,
        "[A-Za-z][A-Za-z ]{2,30}",
    )
        .prop_map(|(name, quantity, cents, supplier)| NewItem {
            name,
            quantity,
            price: cents as f64 / 100.0,
            supplier,
        })
}

/// Proptest strategy for generating complete stored items
pub fn item_strategy() -> impl Strategy<Value = Item> {
    (1i64..99999, new_item_strategy())
        .prop_map(|(id, candidate)| Item::from_new(id, candidate))
}
