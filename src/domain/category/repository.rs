//! Category repository interface

use async_trait::async_trait;

use super::model::{Category, CategoryChanges, CategoryFilter, NewCategory};
use crate::shared::types::{PageBounds, StorageResult};

/// Storage capabilities required by the category CRUD algorithm.
///
/// Implemented once per backend. All validation ordering and pagination
/// logic lives in the service layer; implementations only translate the
/// filter and window into their native query API.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Matching records ordered by ascending id, windowed by `bounds`.
    /// A zero limit returns an empty page.
    async fn find_matching(
        &self,
        filter: &CategoryFilter,
        bounds: PageBounds,
    ) -> StorageResult<Vec<Category>>;

    /// Count of matching records regardless of paging.
    async fn count_matching(&self, filter: &CategoryFilter) -> StorageResult<u64>;

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Category>>;

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool>;

    /// Inserts with a backend-assigned id and returns the stored record.
    async fn insert(&self, input: NewCategory) -> StorageResult<Category>;

    /// Applies `changes` to an existing record. `None` when the record
    /// no longer exists.
    async fn update_fields(
        &self,
        id: i64,
        changes: CategoryChanges,
    ) -> StorageResult<Option<Category>>;

    /// Removes the record; `false` when nothing was removed.
    async fn delete_by_id(&self, id: i64) -> StorageResult<bool>;
}
