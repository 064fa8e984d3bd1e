//! Product repository interface

use async_trait::async_trait;

use super::model::{NewProduct, Product, ProductChanges, ProductFilter};
use crate::shared::types::{PageBounds, StorageResult};

/// Storage capabilities required by the product CRUD algorithm.
///
/// Implementations return products with `category` unset; the service
/// layer owns the binding so no backend duplicates the join.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Matching records ordered by ascending id, windowed by `bounds`.
    /// A zero limit returns an empty page.
    async fn find_matching(
        &self,
        filter: &ProductFilter,
        bounds: PageBounds,
    ) -> StorageResult<Vec<Product>>;

    /// Count of matching records regardless of paging.
    async fn count_matching(&self, filter: &ProductFilter) -> StorageResult<u64>;

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Product>>;

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool>;

    /// Inserts with a backend-assigned id and returns the stored record.
    async fn insert(&self, input: NewProduct) -> StorageResult<Product>;

    /// Applies `changes` to an existing record. `None` when the record
    /// no longer exists.
    async fn update_fields(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> StorageResult<Option<Product>>;

    /// Removes the record; `false` when nothing was removed.
    async fn delete_by_id(&self, id: i64) -> StorageResult<bool>;
}
