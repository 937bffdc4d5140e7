//! Mock implementation of ItemRepository trait
//!
//! Provides a thread-safe mock repository with:
//! - Error injection capabilities
//! - Call tracking for verification
//! - Realistic behavior simulation

use async_trait::async_trait;
use item_core::{Item, ItemError, ItemRepository, NewItem, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

/// Mock implementation of ItemRepository for testing
///
/// Features:
/// - Thread-safe concurrent access
/// - Error injection for failure testing
/// - Call history tracking for verification
/// - The same never-reuse-an-ID guarantee as the real store
pub struct MockItemRepository {
    items: Arc<Mutex<HashMap<i64, Item>>>,
    next_id: Arc<AtomicI64>,
    error_injection: Arc<Mutex<Option<ItemError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockItemRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create mock repository with pre-populated items
    pub fn with_items(items: Vec<Item>) -> Self {
        let mut item_map = HashMap::new();
        let mut max_id = 0;

        for item in items {
            if item.id > max_id {
                max_id = item.id;
            }
            item_map.insert(item.id, item);
        }

        Self {
            items: Arc::new(Mutex::new(item_map)),
            next_id: Arc::new(AtomicI64::new(max_id + 1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create mock repository with specific starting ID
    pub fn with_next_id(next_id: i64) -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(next_id)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inject error for next operation
    pub fn inject_error(&self, error: ItemError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Clear error injection
    pub fn clear_error(&self) {
        *self.error_injection.lock() = None;
    }

    /// Get history of called methods
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Clear call history
    pub fn clear_history(&self) {
        self.call_history.lock().clear();
    }

    /// Assert method was called
    pub fn assert_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            history.iter().any(|call| call.contains(method)),
            "Method '{}' was not called. Call history: {:?}",
            method,
            *history
        );
    }

    /// Check if an error should be injected, consuming it if so
    fn check_error_injection(&self) -> Result<()> {
        let mut error_opt = self.error_injection.lock();
        if let Some(error) = error_opt.take() {
            return Err(error);
        }
        Ok(())
    }

    /// Record method call in history
    fn record_call(&self, method: &str) {
        self.call_history.lock().push(format!("{method}()"));
    }

    /// Record method call with parameters in history
    fn record_call_with_params(&self, method: &str, params: &str) {
        self.call_history.lock().push(format!("{method}({params})"));
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn list(&self) -> Result<Vec<Item>> {
        self.record_call("list");

        // Check for error injection
        self.check_error_injection()?;

        let items = self.items.lock();
        let mut result: Vec<Item> = items.values().cloned().collect();

        // Deterministic order: ascending ID, same as the real store
        result.sort_by_key(|item| item.id);

        Ok(result)
    }

    async fn get(&self, id: i64) -> Result<Option<Item>> {
        self.record_call_with_params("get", &format!("id={id}"));

        // Check for error injection
        self.check_error_injection()?;

        let items = self.items.lock();
        Ok(items.get(&id).cloned())
    }

    async fn create(&self, candidate: NewItem) -> Result<Item> {
        self.record_call_with_params("create", &format!("name={}", candidate.name));

        // Check for error injection
        self.check_error_injection()?;

        // Assign the next unused ID; the counter never goes backwards
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Item::from_new(id, candidate);

        self.items.lock().insert(id, item.clone());

        Ok(item)
    }

    async fn update(&self, id: i64, fields: NewItem) -> Result<Option<Item>> {
        self.record_call_with_params("update", &format!("id={id}"));

        // Check for error injection
        self.check_error_injection()?;

        let mut items = self.items.lock();
        match items.get_mut(&id) {
            Some(item) => {
                // Wholesale overwrite of every non-ID field
                item.name = fields.name;
                item.quantity = fields.quantity;
                item.price = fields.price;
                item.supplier = fields.supplier;
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        self.record_call_with_params("delete", &format!("id={id}"));

        // Check for error injection
        self.check_error_injection()?;

        Ok(self.items.lock().remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<()> {
        self.record_call("health_check");

        // Check for error injection
        self.check_error_injection()?;

        // Mock always reports healthy
        Ok(())
    }
}
