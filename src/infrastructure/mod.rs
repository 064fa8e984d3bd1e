//! External concerns: the three storage backends

pub mod database;
pub mod document;
pub mod memory;

pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use document::{DocumentClient, DocumentRepositoryProvider};
pub use memory::{MemoryRepositoryProvider, MemoryStore};
