use thiserror::Error;

/// Result type alias for item operations
pub type Result<T> = std::result::Result<T, ItemError>;

/// Error types for the stockroom inventory service.
///
/// Absence of an item is deliberately NOT part of this taxonomy: the
/// repository reports it through `Option`/`bool` return values because a
/// missing record is a normal outcome, not a fault. `NotFound` exists for
/// the layers that must surface that outcome as a concrete error (the
/// HTTP handlers map it to a 404 with an empty body).
///
/// # Examples
///
/// ```rust
/// use item_core::error::ItemError;
///
/// let not_found = ItemError::not_found_id(42);
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.status_code(), 404);
///
/// let db = ItemError::Database("connection refused".to_string());
/// assert_eq!(db.status_code(), 500);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Item not found by the given identifier
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Database operation error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ItemError {
    /// Create a not found error for an item ID
    pub fn not_found_id(id: i64) -> Self {
        Self::NotFound(format!("Item with ID {id} not found"))
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, ItemError::NotFound(_))
    }

    /// Check if this error indicates a database problem
    pub fn is_database(&self) -> bool {
        matches!(self, ItemError::Database(_))
    }

    /// Convert to the HTTP status code this error surfaces as
    pub fn status_code(&self) -> u16 {
        match self {
            ItemError::NotFound(_) => 404,
            ItemError::Database(_) => 500,
            ItemError::Configuration(_) => 500,
            ItemError::Internal(_) => 500,
        }
    }
}
