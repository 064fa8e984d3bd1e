//! # Catalog Service
//!
//! CRUD reference service exposing categories and products over HTTP,
//! backed interchangeably by an in-memory store, a relational database or
//! a document store.
//!
//! ## Architecture
//!
//! - **shared**: pagination resolver, operation result contract and error
//!   taxonomy -- the vocabulary every layer speaks
//! - **domain**: entities, filters and repository interfaces
//! - **application**: the CRUD services (validation ordering, pagination,
//!   failure isolation), written once for all backends
//! - **infrastructure**: the three storage backends
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig, StorageBackend};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, CatalogState};
