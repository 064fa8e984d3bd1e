//! In-memory storage backend

mod repositories;
mod store;

pub use repositories::{
    MemoryCategoryRepository, MemoryProductRepository, MemoryRepositoryProvider,
};
pub use store::MemoryStore;
