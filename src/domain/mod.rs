//! Core business entities, filters and repository interfaces

pub mod category;
pub mod product;
pub mod repositories;

pub use category::{Category, CategoryChanges, CategoryFilter, CategoryRepository, NewCategory};
pub use product::{NewProduct, Product, ProductChanges, ProductFilter, ProductRepository};
pub use repositories::RepositoryProvider;
