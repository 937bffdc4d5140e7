//! Item Core Library
//!
//! This crate provides the foundational domain model and trait interfaces
//! for the stockroom inventory service. All other crates depend on the
//! types and interfaces defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain models (Item, NewItem)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//!
//! # Example
//!
//! ```rust
//! use item_core::models::{Item, NewItem};
//!
//! let candidate = NewItem {
//!     name: "Bolt M8".to_string(),
//!     quantity: 100,
//!     price: 0.5,
//!     supplier: "Acme Fasteners".to_string(),
//! };
//!
//! // The store assigns the ID on creation
//! let stored = Item::from_new(1, candidate);
//! assert_eq!(stored.id, 1);
//! ```

pub mod error;
pub mod models;
pub mod repository;

// Re-export commonly used types at the crate root for convenience
pub use error::{ItemError, Result};
pub use models::{Item, NewItem};
pub use repository::ItemRepository;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
