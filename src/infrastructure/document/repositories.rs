//! Document-store implementations of the repository interfaces
//!
//! Each aggregate lives in a single hash mapping id to a JSON document,
//! with an INCR sequence for id assignment:
//!
//! ```text
//! catalog:categories       HSET <id> <json>
//! catalog:categories:seq   INCR
//! catalog:products         HSET <id> <json>
//! catalog:products:seq     INCR
//! ```
//!
//! Reads load the hash values, deserialize and filter in process -- the
//! reference-app equivalent of the array backend. Single-document writes
//! are atomic; the check-then-act window between validation and write is
//! the same documented gap as in the memory backend.

use async_trait::async_trait;

use super::client::DocumentClient;
use crate::domain::{
    Category, CategoryChanges, CategoryFilter, CategoryRepository, NewCategory, NewProduct,
    Product, ProductChanges, ProductFilter, ProductRepository, RepositoryProvider,
};
use crate::shared::types::{apply_bounds, PageBounds, StorageResult};

// ── DocumentCategoryRepository ──────────────────────────────────

pub struct DocumentCategoryRepository {
    client: DocumentClient,
}

impl DocumentCategoryRepository {
    pub fn new(client: DocumentClient) -> Self {
        Self { client }
    }

    fn hash_key(&self) -> String {
        self.client.key("categories")
    }

    fn seq_key(&self) -> String {
        self.client.key("categories:seq")
    }

    async fn load_all(&self) -> StorageResult<Vec<Category>> {
        let mut conn = self.client.conn();
        let raw: Vec<String> = redis::cmd("HVALS")
            .arg(self.hash_key())
            .query_async(&mut conn)
            .await?;

        let mut items = raw
            .iter()
            .map(|doc| serde_json::from_str(doc))
            .collect::<Result<Vec<Category>, _>>()?;
        items.sort_by_key(|category| category.id);
        Ok(items)
    }
}

#[async_trait]
impl CategoryRepository for DocumentCategoryRepository {
    async fn find_matching(
        &self,
        filter: &CategoryFilter,
        bounds: PageBounds,
    ) -> StorageResult<Vec<Category>> {
        let matching = self
            .load_all()
            .await?
            .into_iter()
            .filter(|category| filter.matches(category))
            .collect();
        Ok(apply_bounds(matching, bounds))
    }

    async fn count_matching(&self, filter: &CategoryFilter) -> StorageResult<u64> {
        Ok(self
            .load_all()
            .await?
            .iter()
            .filter(|category| filter.matches(category))
            .count() as u64)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Category>> {
        let mut conn = self.client.conn();
        let doc: Option<String> = redis::cmd("HGET")
            .arg(self.hash_key())
            .arg(id)
            .query_async(&mut conn)
            .await?;
        Ok(doc.map(|doc| serde_json::from_str(&doc)).transpose()?)
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        let mut conn = self.client.conn();
        let exists: bool = redis::cmd("HEXISTS")
            .arg(self.hash_key())
            .arg(id)
            .query_async(&mut conn)
            .await?;
        Ok(exists)
    }

    async fn insert(&self, input: NewCategory) -> StorageResult<Category> {
        let mut conn = self.client.conn();
        let id: i64 = redis::cmd("INCR")
            .arg(self.seq_key())
            .query_async(&mut conn)
            .await?;

        let category = Category {
            id,
            name: input.name,
        };
        let _: () = redis::cmd("HSET")
            .arg(self.hash_key())
            .arg(category.id)
            .arg(serde_json::to_string(&category)?)
            .query_async(&mut conn)
            .await?;
        Ok(category)
    }

    async fn update_fields(
        &self,
        id: i64,
        changes: CategoryChanges,
    ) -> StorageResult<Option<Category>> {
        let Some(mut category) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        category.name = changes.name;

        let mut conn = self.client.conn();
        let _: () = redis::cmd("HSET")
            .arg(self.hash_key())
            .arg(category.id)
            .arg(serde_json::to_string(&category)?)
            .query_async(&mut conn)
            .await?;
        Ok(Some(category))
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<bool> {
        let mut conn = self.client.conn();
        let removed: i64 = redis::cmd("HDEL")
            .arg(self.hash_key())
            .arg(id)
            .query_async(&mut conn)
            .await?;
        Ok(removed > 0)
    }
}

// ── DocumentProductRepository ───────────────────────────────────

pub struct DocumentProductRepository {
    client: DocumentClient,
}

impl DocumentProductRepository {
    pub fn new(client: DocumentClient) -> Self {
        Self { client }
    }

    fn hash_key(&self) -> String {
        self.client.key("products")
    }

    fn seq_key(&self) -> String {
        self.client.key("products:seq")
    }

    async fn load_all(&self) -> StorageResult<Vec<Product>> {
        let mut conn = self.client.conn();
        let raw: Vec<String> = redis::cmd("HVALS")
            .arg(self.hash_key())
            .query_async(&mut conn)
            .await?;

        let mut items = raw
            .iter()
            .map(|doc| serde_json::from_str(doc))
            .collect::<Result<Vec<Product>, _>>()?;
        items.sort_by_key(|product| product.id);
        Ok(items)
    }

    async fn store(&self, product: &Product) -> StorageResult<()> {
        // The category binding is read-side state; persist the bare record.
        let doc = serde_json::to_string(&Product {
            category: None,
            ..product.clone()
        })?;

        let mut conn = self.client.conn();
        let _: () = redis::cmd("HSET")
            .arg(self.hash_key())
            .arg(product.id)
            .arg(doc)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for DocumentProductRepository {
    async fn find_matching(
        &self,
        filter: &ProductFilter,
        bounds: PageBounds,
    ) -> StorageResult<Vec<Product>> {
        let matching = self
            .load_all()
            .await?
            .into_iter()
            .filter(|product| filter.matches(product))
            .collect();
        Ok(apply_bounds(matching, bounds))
    }

    async fn count_matching(&self, filter: &ProductFilter) -> StorageResult<u64> {
        Ok(self
            .load_all()
            .await?
            .iter()
            .filter(|product| filter.matches(product))
            .count() as u64)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Product>> {
        let mut conn = self.client.conn();
        let doc: Option<String> = redis::cmd("HGET")
            .arg(self.hash_key())
            .arg(id)
            .query_async(&mut conn)
            .await?;
        Ok(doc.map(|doc| serde_json::from_str(&doc)).transpose()?)
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        let mut conn = self.client.conn();
        let exists: bool = redis::cmd("HEXISTS")
            .arg(self.hash_key())
            .arg(id)
            .query_async(&mut conn)
            .await?;
        Ok(exists)
    }

    async fn insert(&self, input: NewProduct) -> StorageResult<Product> {
        let mut conn = self.client.conn();
        let id: i64 = redis::cmd("INCR")
            .arg(self.seq_key())
            .query_async(&mut conn)
            .await?;

        let product = Product {
            id,
            name: input.name,
            price: input.price,
            category_id: input.category_id,
            category: None,
        };
        self.store(&product).await?;
        Ok(product)
    }

    async fn update_fields(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> StorageResult<Option<Product>> {
        let Some(mut product) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        product.name = changes.name;
        product.price = changes.price;
        product.category_id = changes.category_id;

        self.store(&product).await?;
        Ok(Some(product))
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<bool> {
        let mut conn = self.client.conn();
        let removed: i64 = redis::cmd("HDEL")
            .arg(self.hash_key())
            .arg(id)
            .query_async(&mut conn)
            .await?;
        Ok(removed > 0)
    }
}

// ── DocumentRepositoryProvider ──────────────────────────────────

/// Repository provider backed by the document store.
pub struct DocumentRepositoryProvider {
    categories: DocumentCategoryRepository,
    products: DocumentProductRepository,
}

impl DocumentRepositoryProvider {
    pub fn new(client: DocumentClient) -> Self {
        Self {
            categories: DocumentCategoryRepository::new(client.clone()),
            products: DocumentProductRepository::new(client),
        }
    }
}

impl RepositoryProvider for DocumentRepositoryProvider {
    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }
}
