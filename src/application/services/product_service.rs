//! Product CRUD operations
//!
//! Same operation-level algorithm as the category service, extended with
//! the referential check against categories and the read-side category
//! binding.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{
    Category, NewProduct, Product, ProductChanges, ProductFilter, RepositoryProvider,
};
use crate::shared::types::{
    compute_bounds, compute_page_info, OperationResult, StorageResult, ValidationError,
};

/// Products data-access service.
pub struct ProductService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ProductService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Creates a new product.
    pub async fn create(&self, input: NewProduct) -> OperationResult<Product> {
        self.try_create(input)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_create(&self, input: NewProduct) -> StorageResult<OperationResult<Product>> {
        // Natural-key uniqueness runs first and short-circuits; the
        // referential check below must not run on a duplicate name.
        let taken = self
            .repos
            .products()
            .count_matching(&ProductFilter::natural_key(&input.name, None))
            .await?;
        if taken > 0 {
            return Ok(OperationResult::rejected(ValidationError::value_exists(
                "name",
                "Product name already exists",
            )));
        }

        let Some(category) = self.repos.categories().find_by_id(input.category_id).await? else {
            return Ok(OperationResult::rejected(
                ValidationError::related_entity_not_found(
                    "category_id",
                    "Product's category not found",
                ),
            ));
        };

        let mut product = self.repos.products().insert(input).await?;
        product.category = Some(category);
        Ok(OperationResult::Success(product))
    }

    /// Searches products by name fragment and category set, paginated.
    pub async fn search(
        &self,
        name: Option<String>,
        category_ids: Vec<i64>,
        page: i64,
        page_size: i64,
    ) -> OperationResult<Product> {
        self.try_search(name, category_ids, page, page_size)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_search(
        &self,
        name: Option<String>,
        category_ids: Vec<i64>,
        page: i64,
        page_size: i64,
    ) -> StorageResult<OperationResult<Product>> {
        // An absent/zero page reads as page 1; the value is echoed in the
        // descriptor, so the fallback happens before both calls below.
        let page = if page == 0 { 1 } else { page };
        let bounds = compute_bounds(page, page_size);
        let filter = ProductFilter::search(name, category_ids);

        let mut items = self.repos.products().find_matching(&filter, bounds).await?;
        let total = self.repos.products().count_matching(&filter).await?;
        self.bind_categories(&mut items).await?;
        let info = compute_page_info(page, page_size, total, items.len() as u64);

        Ok(OperationResult::SuccessList(items, info))
    }

    /// Finds the product with the given id.
    pub async fn find_by_id(&self, id: i64) -> OperationResult<Product> {
        self.try_find_by_id(id)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_find_by_id(&self, id: i64) -> StorageResult<OperationResult<Product>> {
        let Some(mut product) = self.repos.products().find_by_id(id).await? else {
            return Ok(OperationResult::NotFound);
        };
        product.category = self.repos.categories().find_by_id(product.category_id).await?;
        Ok(OperationResult::Success(product))
    }

    /// Updates an existing product.
    pub async fn update(&self, id: i64, changes: ProductChanges) -> OperationResult<Product> {
        self.try_update(id, changes)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_update(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> StorageResult<OperationResult<Product>> {
        if !self.repos.products().exists_by_id(id).await? {
            return Ok(OperationResult::NotFound);
        }

        // Uniqueness is scoped to all *other* records on update.
        let taken = self
            .repos
            .products()
            .count_matching(&ProductFilter::natural_key(&changes.name, Some(id)))
            .await?;
        if taken > 0 {
            return Ok(OperationResult::rejected(ValidationError::value_exists(
                "name",
                "Product name already exists",
            )));
        }

        let Some(category) = self.repos.categories().find_by_id(changes.category_id).await? else {
            return Ok(OperationResult::rejected(
                ValidationError::related_entity_not_found(
                    "category_id",
                    "Product's category not found",
                ),
            ));
        };

        Ok(match self.repos.products().update_fields(id, changes).await? {
            Some(mut product) => {
                product.category = Some(category);
                OperationResult::Success(product)
            }
            // The record vanished between check and write.
            None => OperationResult::NotFound,
        })
    }

    /// Deletes an existing product.
    pub async fn delete(&self, id: i64) -> OperationResult<Product> {
        self.try_delete(id)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_delete(&self, id: i64) -> StorageResult<OperationResult<Product>> {
        let Some(product) = self.repos.products().find_by_id(id).await? else {
            return Ok(OperationResult::NotFound);
        };

        if !self.repos.products().delete_by_id(id).await? {
            return Ok(OperationResult::NotFound);
        }
        Ok(OperationResult::Success(product))
    }

    /// Attaches each product's category, one lookup per distinct id.
    ///
    /// The join lives here so backends never duplicate it.
    async fn bind_categories(&self, products: &mut [Product]) -> StorageResult<()> {
        let mut cache: HashMap<i64, Option<Category>> = HashMap::new();

        for product in products.iter_mut() {
            if !cache.contains_key(&product.category_id) {
                let found = self.repos.categories().find_by_id(product.category_id).await?;
                cache.insert(product.category_id, found);
            }
            product.category = cache[&product.category_id].clone();
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{failing_provider, seeded_provider};
    use crate::shared::types::AppErrorCode;

    async fn seeded_with_products() -> (Arc<dyn RepositoryProvider>, ProductService) {
        let repos = seeded_provider().await;
        for (name, price, category_id) in [
            ("Samsung Galaxy S5", 4500.0, 1),
            ("Huawei P30", 6500.0, 1),
            ("Dell Inspiron 5520", 12000.0, 2),
        ] {
            repos
                .products()
                .insert(NewProduct {
                    name: name.to_string(),
                    price,
                    category_id,
                })
                .await
                .unwrap();
        }
        let repos: Arc<dyn RepositoryProvider> = repos;
        (repos.clone(), ProductService::new(repos))
    }

    #[tokio::test]
    async fn create_binds_the_category() {
        let (_, svc) = seeded_with_products().await;

        let result = svc
            .create(NewProduct {
                name: "Samsung Galaxy S6".to_string(),
                price: 5000.0,
                category_id: 1,
            })
            .await;

        match result {
            OperationResult::Success(product) => {
                assert_eq!(product.category_id, 1);
                assert_eq!(product.category.as_ref().unwrap().name, "Mobiles");
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_duplicate_name_short_circuits_before_referential_check() {
        let (_, svc) = seeded_with_products().await;

        // Violates both rules at once: duplicate name and missing category.
        // Only the uniqueness failure may surface.
        let result = svc
            .create(NewProduct {
                name: "Huawei P30".to_string(),
                price: 1.0,
                category_id: 999,
            })
            .await;

        match result {
            OperationResult::ValidationFailed(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, AppErrorCode::ValueExists);
                assert_eq!(errors[0].source.as_deref(), Some("name"));
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_with_missing_category_is_rejected() {
        let (_, svc) = seeded_with_products().await;

        let result = svc
            .create(NewProduct {
                name: "Toshiba Pro-Book 9099".to_string(),
                price: 9000.0,
                category_id: 999,
            })
            .await;

        match result {
            OperationResult::ValidationFailed(errors) => {
                assert_eq!(errors[0].code, AppErrorCode::RelatedEntityNotFound);
                assert_eq!(errors[0].source.as_deref(), Some("category_id"));
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_restricts_to_categories_and_binds_them() {
        let (_, svc) = seeded_with_products().await;

        match svc.search(None, vec![1], 1, 10).await {
            OperationResult::SuccessList(items, info) => {
                assert_eq!(items.len(), 2);
                assert_eq!(info.total, 2);
                assert!(items
                    .iter()
                    .all(|p| p.category.as_ref().unwrap().name == "Mobiles"));
            }
            other => panic!("expected SuccessList, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_name_is_case_insensitive() {
        let (_, svc) = seeded_with_products().await;

        match svc.search(Some("GALAXY".to_string()), Vec::new(), 1, 10).await {
            OperationResult::SuccessList(items, _) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "Samsung Galaxy S5");
            }
            other => panic!("expected SuccessList, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_pages_with_descriptor() {
        let (_, svc) = seeded_with_products().await;

        match svc.search(None, Vec::new(), 2, 2).await {
            OperationResult::SuccessList(items, info) => {
                assert_eq!(items.len(), 1);
                assert_eq!(info.page, 2);
                assert_eq!(info.count, 1);
                assert_eq!(info.total, 3);
                assert_eq!(info.previous_page, Some(1));
                assert_eq!(info.next_page, None);
            }
            other => panic!("expected SuccessList, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let (_, svc) = seeded_with_products().await;
        assert!(matches!(svc.find_by_id(999).await, OperationResult::NotFound));
    }

    #[tokio::test]
    async fn update_moves_product_to_another_category() {
        let (_, svc) = seeded_with_products().await;

        let result = svc
            .update(
                1,
                ProductChanges {
                    name: "Samsung Galaxy S5".to_string(),
                    price: 4000.0,
                    category_id: 2,
                },
            )
            .await;

        match result {
            OperationResult::Success(product) => {
                assert_eq!(product.price, 4000.0);
                assert_eq!(product.category.as_ref().unwrap().name, "Laptops");
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_to_missing_category_is_rejected() {
        let (_, svc) = seeded_with_products().await;

        let result = svc
            .update(
                1,
                ProductChanges {
                    name: "Samsung Galaxy S5".to_string(),
                    price: 4500.0,
                    category_id: 999,
                },
            )
            .await;

        match result {
            OperationResult::ValidationFailed(errors) => {
                assert_eq!(errors[0].code, AppErrorCode::RelatedEntityNotFound);
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_returns_the_removed_product() {
        let (repos, svc) = seeded_with_products().await;

        match svc.delete(2).await {
            OperationResult::Success(product) => assert_eq!(product.name, "Huawei P30"),
            other => panic!("expected Success, got {:?}", other),
        }
        assert!(!repos.products().exists_by_id(2).await.unwrap());
    }

    #[tokio::test]
    async fn backend_fault_during_search_is_captured() {
        let svc = ProductService::new(failing_provider());

        match svc.search(None, Vec::new(), 1, 10).await {
            OperationResult::Failed(_) => {}
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
