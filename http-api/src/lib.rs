//! REST API for the item store
//!
//! This crate provides the HTTP surface over any item repository
//! implementation using axum.
//!
//! # Overview
//!
//! The http-api crate implements the bridge between the core item operations
//! and HTTP clients. It provides:
//!
//! - CRUD endpoints under `/api/items` with JSON request and response bodies
//! - Error mapping from core errors to HTTP status codes
//! - Allow-all CORS so browser frontends on other origins can call the API
//! - Single-line request logging with timing
//!
//! # Usage
//!
//! ```no_run
//! use http_api::ItemApi;
//! use mocks::MockItemRepository;
//! use std::sync::Arc;
//!
//! async fn start_server() -> Result<(), Box<dyn std::error::Error>> {
//!     // In real usage, you would use database::SqliteItemRepository
//!     let repository = Arc::new(MockItemRepository::new());
//!     let server = ItemApi::new(repository);
//!     server.serve("127.0.0.1:3000").await?;
//!     Ok(())
//! }
//! ```

pub mod cors;
pub mod error;
pub mod request_logger;
pub mod server;

// Re-export key types for easier usage
pub use error::ApiError;
pub use server::{ApiState, HealthStatus, ItemApi};

// Re-export core types for external consumers
pub use item_core::{Item, ItemError, ItemRepository, NewItem};
