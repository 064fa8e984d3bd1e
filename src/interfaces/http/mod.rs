//! HTTP REST API interfaces
//!
//! - `common`: response envelope, outcome mapping and extractors
//! - `modules`: per-resource handlers and DTOs
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, CatalogState};
