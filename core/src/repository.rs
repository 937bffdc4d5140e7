use crate::{
    error::Result,
    models::{Item, NewItem},
};
use async_trait::async_trait;

/// Repository trait for item persistence and retrieval operations.
///
/// This trait defines the interface for all item data operations.
/// Implementations must be thread-safe and support concurrent access:
/// two concurrent `create` calls must never hand out the same ID, and
/// racing mutations on the same ID must apply in some serial order.
///
/// Absence is a normal outcome, not an error. `get` and `update` report
/// it as `Ok(None)`, `delete` as `Ok(false)`; `Err` is reserved for
/// storage faults.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List every stored item
    ///
    /// # Returns
    /// * `Ok(Vec<Item>)` - All items in ascending ID order (may be empty)
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn list(&self) -> Result<Vec<Item>>;

    /// Get an item by its numeric ID
    ///
    /// # Arguments
    /// * `id` - The item ID to find
    ///
    /// # Returns
    /// * `Ok(Some(Item))` - The item if found
    /// * `Ok(None)` - If no item exists with that ID
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn get(&self, id: i64) -> Result<Option<Item>>;

    /// Create a new item
    ///
    /// # Arguments
    /// * `candidate` - The new item data to persist
    ///
    /// # Returns
    /// * `Ok(Item)` - The stored item with its assigned ID
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn create(&self, candidate: NewItem) -> Result<Item>;

    /// Replace every non-ID field of an existing item
    ///
    /// # Arguments
    /// * `id` - The item ID to update
    /// * `fields` - Replacement values for name, quantity, price, supplier
    ///
    /// # Returns
    /// * `Ok(Some(Item))` - The updated item
    /// * `Ok(None)` - If no item exists with that ID; nothing is mutated
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn update(&self, id: i64, fields: NewItem) -> Result<Option<Item>>;

    /// Delete an item by its numeric ID
    ///
    /// # Arguments
    /// * `id` - The item ID to delete
    ///
    /// # Returns
    /// * `Ok(true)` - The item existed and was removed
    /// * `Ok(false)` - If no item exists with that ID; nothing is mutated
    /// * `Err(ItemError::Database)` - If the database operation fails
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Get repository health status for monitoring
    ///
    /// # Returns
    /// * `Ok(())` - Repository is healthy and connected
    /// * `Err(ItemError::Database)` - Repository is unhealthy
    async fn health_check(&self) -> Result<()>;
}
