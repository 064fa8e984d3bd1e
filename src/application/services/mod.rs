//! Data-access services
//!
//! One CRUD algorithm per aggregate, written once against the repository
//! interfaces and shared by all storage backends.

pub mod category_service;
pub mod product_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared fixtures for service tests.

    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::domain::{
        Category, CategoryChanges, CategoryFilter, CategoryRepository, NewCategory, NewProduct,
        Product, ProductChanges, ProductFilter, ProductRepository, RepositoryProvider,
    };
    use crate::infrastructure::memory::{MemoryRepositoryProvider, MemoryStore};
    use crate::shared::types::{PageBounds, StorageError, StorageResult};

    /// Memory provider holding three categories (ids 1..=3) and no products.
    pub async fn seeded_provider() -> Arc<MemoryRepositoryProvider> {
        let provider = Arc::new(MemoryRepositoryProvider::new(Arc::new(MemoryStore::new())));
        for name in ["Mobiles", "Laptops", "TVs"] {
            provider
                .categories()
                .insert(NewCategory {
                    name: name.to_string(),
                })
                .await
                .unwrap();
        }
        provider
    }

    /// Provider whose every call fails with a backend fault.
    pub fn failing_provider() -> Arc<dyn RepositoryProvider> {
        Arc::new(FailingProvider)
    }

    struct FailingProvider;

    fn fault() -> StorageError {
        sea_orm::DbErr::Custom("backend unavailable".to_string()).into()
    }

    impl RepositoryProvider for FailingProvider {
        fn categories(&self) -> &dyn CategoryRepository {
            self
        }

        fn products(&self) -> &dyn ProductRepository {
            self
        }
    }

    #[async_trait]
    impl CategoryRepository for FailingProvider {
        async fn find_matching(
            &self,
            _filter: &CategoryFilter,
            _bounds: PageBounds,
        ) -> StorageResult<Vec<Category>> {
            Err(fault())
        }

        async fn count_matching(&self, _filter: &CategoryFilter) -> StorageResult<u64> {
            Err(fault())
        }

        async fn find_by_id(&self, _id: i64) -> StorageResult<Option<Category>> {
            Err(fault())
        }

        async fn exists_by_id(&self, _id: i64) -> StorageResult<bool> {
            Err(fault())
        }

        async fn insert(&self, _input: NewCategory) -> StorageResult<Category> {
            Err(fault())
        }

        async fn update_fields(
            &self,
            _id: i64,
            _changes: CategoryChanges,
        ) -> StorageResult<Option<Category>> {
            Err(fault())
        }

        async fn delete_by_id(&self, _id: i64) -> StorageResult<bool> {
            Err(fault())
        }
    }

    #[async_trait]
    impl ProductRepository for FailingProvider {
        async fn find_matching(
            &self,
            _filter: &ProductFilter,
            _bounds: PageBounds,
        ) -> StorageResult<Vec<Product>> {
            Err(fault())
        }

        async fn count_matching(&self, _filter: &ProductFilter) -> StorageResult<u64> {
            Err(fault())
        }

        async fn find_by_id(&self, _id: i64) -> StorageResult<Option<Product>> {
            Err(fault())
        }

        async fn exists_by_id(&self, _id: i64) -> StorageResult<bool> {
            Err(fault())
        }

        async fn insert(&self, _input: NewProduct) -> StorageResult<Product> {
            Err(fault())
        }

        async fn update_fields(
            &self,
            _id: i64,
            _changes: ProductChanges,
        ) -> StorageResult<Option<Product>> {
            Err(fault())
        }

        async fn delete_by_id(&self, _id: i64) -> StorageResult<bool> {
            Err(fault())
        }
    }
}
