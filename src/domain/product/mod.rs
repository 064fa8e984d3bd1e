//! Product aggregate

pub mod model;
pub mod repository;

pub use model::{NewProduct, Product, ProductChanges, ProductFilter};
pub use repository::ProductRepository;
