//! Mock implementations and test utilities for the stockroom inventory service
//!
//! This crate provides comprehensive testing infrastructure including:
//! - A mock implementation of the item repository trait
//! - Realistic test data generators
//! - Custom assertion helpers
//! - Property-based testing strategies
//! - Contract test helpers

pub mod assertions;
pub mod builders;
pub mod contracts;
pub mod fixtures;
pub mod generators;
pub mod repository;

pub use assertions::*;
pub use builders::*;
pub use contracts::*;
pub use fixtures::*;
pub use generators::*;
pub use repository::MockItemRepository;
