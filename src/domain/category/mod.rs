//! Category aggregate

pub mod model;
pub mod repository;

pub use model::{Category, CategoryChanges, CategoryFilter, NewCategory};
pub use repository::CategoryRepository;
