//! Database crate for the stockroom inventory service
//!
//! This crate provides the SQLite implementation of the ItemRepository trait,
//! offering item persistence with connection pooling, prepared statements,
//! and comprehensive error handling.
//!
//! # Features
//!
//! - SQLite database support with WAL mode for better concurrency
//! - Database migrations with proper schema management
//! - Connection pooling for optimal performance
//! - AUTOINCREMENT identifiers that are never reused within a store lifetime
//! - Full test coverage with in-memory database support
//!
//! # Usage
//!
//! ```rust
//! use database::SqliteItemRepository;
//! use item_core::repository::ItemRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create repository (in-memory for testing)
//!     let repo = SqliteItemRepository::new(":memory:").await?;
//!
//!     // Run migrations
//!     repo.migrate().await?;
//!
//!     // Repository is ready to use
//!     repo.health_check().await?;
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteItemRepository;

// Re-export commonly used types from item-core for convenience
pub use item_core::{
    error::{ItemError, Result},
    models::{Item, NewItem},
    repository::ItemRepository,
};
