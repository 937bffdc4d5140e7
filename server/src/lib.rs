//! Stockroom Server Library
//!
//! This library provides the wiring for the stockroom inventory server:
//! configuration management, telemetry initialization, database setup, and
//! server composition.

pub mod config;
pub mod setup;
pub mod telemetry;

pub use config::Config;
pub use setup::{create_repository, create_server, ensure_database_directory, initialize_app};
pub use telemetry::init_telemetry;
