//! Document-style storage backend (Redis)

mod client;
mod repositories;

pub use client::DocumentClient;
pub use repositories::{
    DocumentCategoryRepository, DocumentProductRepository, DocumentRepositoryProvider,
};
