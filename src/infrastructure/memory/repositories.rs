//! Memory implementations of the repository interfaces
//!
//! Filtering and windowing happen in process over a snapshot of the
//! table, ordered by ascending id to keep paging deterministic.

use std::sync::Arc;

use async_trait::async_trait;

use super::store::MemoryStore;
use crate::domain::{
    Category, CategoryChanges, CategoryFilter, CategoryRepository, NewCategory, NewProduct,
    Product, ProductChanges, ProductFilter, ProductRepository, RepositoryProvider,
};
use crate::shared::types::{apply_bounds, PageBounds, StorageResult};

// ── MemoryCategoryRepository ────────────────────────────────────

pub struct MemoryCategoryRepository {
    store: Arc<MemoryStore>,
}

impl MemoryCategoryRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn snapshot(&self, filter: &CategoryFilter) -> Vec<Category> {
        let mut items: Vec<Category> = self
            .store
            .categories
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|category| filter.matches(category))
            .collect();
        items.sort_by_key(|category| category.id);
        items
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn find_matching(
        &self,
        filter: &CategoryFilter,
        bounds: PageBounds,
    ) -> StorageResult<Vec<Category>> {
        Ok(apply_bounds(self.snapshot(filter), bounds))
    }

    async fn count_matching(&self, filter: &CategoryFilter) -> StorageResult<u64> {
        Ok(self.snapshot(filter).len() as u64)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Category>> {
        Ok(self.store.categories.get(&id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        Ok(self.store.categories.contains_key(&id))
    }

    async fn insert(&self, input: NewCategory) -> StorageResult<Category> {
        let category = Category {
            id: self.store.next_category_id(),
            name: input.name,
        };
        self.store.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_fields(
        &self,
        id: i64,
        changes: CategoryChanges,
    ) -> StorageResult<Option<Category>> {
        Ok(self.store.categories.get_mut(&id).map(|mut entry| {
            entry.name = changes.name;
            entry.value().clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<bool> {
        Ok(self.store.categories.remove(&id).is_some())
    }
}

// ── MemoryProductRepository ─────────────────────────────────────

pub struct MemoryProductRepository {
    store: Arc<MemoryStore>,
}

impl MemoryProductRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn snapshot(&self, filter: &ProductFilter) -> Vec<Product> {
        let mut items: Vec<Product> = self
            .store
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|product| filter.matches(product))
            .collect();
        items.sort_by_key(|product| product.id);
        items
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_matching(
        &self,
        filter: &ProductFilter,
        bounds: PageBounds,
    ) -> StorageResult<Vec<Product>> {
        Ok(apply_bounds(self.snapshot(filter), bounds))
    }

    async fn count_matching(&self, filter: &ProductFilter) -> StorageResult<u64> {
        Ok(self.snapshot(filter).len() as u64)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Product>> {
        Ok(self.store.products.get(&id).map(|entry| entry.value().clone()))
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        Ok(self.store.products.contains_key(&id))
    }

    async fn insert(&self, input: NewProduct) -> StorageResult<Product> {
        let product = Product {
            id: self.store.next_product_id(),
            name: input.name,
            price: input.price,
            category_id: input.category_id,
            category: None,
        };
        self.store.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_fields(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> StorageResult<Option<Product>> {
        Ok(self.store.products.get_mut(&id).map(|mut entry| {
            entry.name = changes.name;
            entry.price = changes.price;
            entry.category_id = changes.category_id;
            entry.value().clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<bool> {
        Ok(self.store.products.remove(&id).is_some())
    }
}

// ── MemoryRepositoryProvider ────────────────────────────────────

/// Repository provider backed by the in-memory tables.
pub struct MemoryRepositoryProvider {
    categories: MemoryCategoryRepository,
    products: MemoryProductRepository,
}

impl MemoryRepositoryProvider {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            categories: MemoryCategoryRepository::new(store.clone()),
            products: MemoryProductRepository::new(store),
        }
    }

    /// Provider over a store pre-populated with the demo catalog.
    pub fn seeded() -> Self {
        Self::new(Arc::new(MemoryStore::seeded()))
    }
}

impl RepositoryProvider for MemoryRepositoryProvider {
    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }
}

// ── Tests ──────────────────────────────────────────────────────
