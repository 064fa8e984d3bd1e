//! Category CRUD operations
//!
//! The operation-level algorithm shared by every storage backend.
//! Validation ordering, pagination and failure isolation live here and
//! only here; backends just answer capability calls.

use std::sync::Arc;

use crate::domain::{
    Category, CategoryChanges, CategoryFilter, NewCategory, ProductFilter, RepositoryProvider,
};
use crate::shared::types::{
    compute_bounds, compute_page_info, OperationResult, StorageResult, ValidationError,
};

/// Categories data-access service.
pub struct CategoryService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CategoryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Creates a new category.
    pub async fn create(&self, input: NewCategory) -> OperationResult<Category> {
        self.try_create(input)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_create(&self, input: NewCategory) -> StorageResult<OperationResult<Category>> {
        // Natural-key uniqueness runs first and short-circuits.
        let taken = self
            .repos
            .categories()
            .count_matching(&CategoryFilter::natural_key(&input.name, None))
            .await?;
        if taken > 0 {
            return Ok(OperationResult::rejected(ValidationError::value_exists(
                "name",
                "Category name already exists",
            )));
        }

        let category = self.repos.categories().insert(input).await?;
        Ok(OperationResult::Success(category))
    }

    /// Searches categories by name fragment, paginated.
    pub async fn search(
        &self,
        name: Option<String>,
        page: i64,
        page_size: i64,
    ) -> OperationResult<Category> {
        self.try_search(name, page, page_size)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_search(
        &self,
        name: Option<String>,
        page: i64,
        page_size: i64,
    ) -> StorageResult<OperationResult<Category>> {
        // An absent/zero page reads as page 1; the value is echoed in the
        // descriptor, so the fallback happens before both calls below.
        let page = if page == 0 { 1 } else { page };
        let bounds = compute_bounds(page, page_size);
        let filter = CategoryFilter::search(name);

        let items = self.repos.categories().find_matching(&filter, bounds).await?;
        let total = self.repos.categories().count_matching(&filter).await?;
        let info = compute_page_info(page, page_size, total, items.len() as u64);

        Ok(OperationResult::SuccessList(items, info))
    }

    /// Finds the category with the given id.
    pub async fn find_by_id(&self, id: i64) -> OperationResult<Category> {
        self.try_find_by_id(id)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_find_by_id(&self, id: i64) -> StorageResult<OperationResult<Category>> {
        Ok(match self.repos.categories().find_by_id(id).await? {
            Some(category) => OperationResult::Success(category),
            None => OperationResult::NotFound,
        })
    }

    /// Updates an existing category.
    pub async fn update(&self, id: i64, changes: CategoryChanges) -> OperationResult<Category> {
        self.try_update(id, changes)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_update(
        &self,
        id: i64,
        changes: CategoryChanges,
    ) -> StorageResult<OperationResult<Category>> {
        if !self.repos.categories().exists_by_id(id).await? {
            return Ok(OperationResult::NotFound);
        }

        // Uniqueness is scoped to all *other* records on update.
        let taken = self
            .repos
            .categories()
            .count_matching(&CategoryFilter::natural_key(&changes.name, Some(id)))
            .await?;
        if taken > 0 {
            return Ok(OperationResult::rejected(ValidationError::value_exists(
                "name",
                "Category name already exists",
            )));
        }

        Ok(match self.repos.categories().update_fields(id, changes).await? {
            Some(category) => OperationResult::Success(category),
            // The record vanished between check and write.
            None => OperationResult::NotFound,
        })
    }

    /// Deletes an existing category unless products still reference it.
    pub async fn delete(&self, id: i64) -> OperationResult<Category> {
        self.try_delete(id)
            .await
            .unwrap_or_else(OperationResult::Failed)
    }

    async fn try_delete(&self, id: i64) -> StorageResult<OperationResult<Category>> {
        let Some(category) = self.repos.categories().find_by_id(id).await? else {
            return Ok(OperationResult::NotFound);
        };

        // Cascading deletes are disallowed by design: a category with
        // dependent products stays.
        let dependents = self
            .repos
            .products()
            .count_matching(&ProductFilter::in_category(id))
            .await?;
        if dependents > 0 {
            return Ok(OperationResult::rejected(ValidationError::cant_be_deleted(
                "Category can't be deleted because there are some products related to this category",
            )));
        }

        if !self.repos.categories().delete_by_id(id).await? {
            return Ok(OperationResult::NotFound);
        }
        Ok(OperationResult::Success(category))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{failing_provider, seeded_provider};
    use crate::domain::NewProduct;
    use crate::shared::types::AppErrorCode;

    fn service(repos: Arc<dyn RepositoryProvider>) -> CategoryService {
        CategoryService::new(repos)
    }

    #[tokio::test]
    async fn create_assigns_the_next_id() {
        let repos = seeded_provider().await;
        let svc = service(repos);

        let result = svc
            .create(NewCategory {
                name: "Cameras".to_string(),
            })
            .await;

        match result {
            OperationResult::Success(category) => {
                assert_eq!(category.name, "Cameras");
                assert_eq!(category.id, 4);
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let repos = seeded_provider().await;
        let svc = service(repos);

        let result = svc
            .create(NewCategory {
                name: "Mobiles".to_string(),
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
    async fn search_pages_through_matches() {
        let repos = seeded_provider().await;
        let svc = service(repos);

        let result = svc.search(None, 1, 2).await;
        match result {
            OperationResult::SuccessList(items, info) => {
                assert_eq!(items.len(), 2);
                assert_eq!(info.total, 3);
                assert_eq!(info.total_pages, 2);
                assert_eq!(info.next_page, Some(2));
                assert_eq!(info.previous_page, None);
            }
            other => panic!("expected SuccessList, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_zero_page_size_returns_no_rows() {
        let repos = seeded_provider().await;
        let svc = service(repos);

        match svc.search(None, 0, 0).await {
            OperationResult::SuccessList(items, info) => {
                assert!(items.is_empty());
                assert_eq!(info.total, 3);
                assert_eq!(info.total_pages, 0);
                assert_eq!(info.page, 1);
            }
            other => panic!("expected SuccessList, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_filters_by_name_fragment() {
        let repos = seeded_provider().await;
        let svc = service(repos);

        match svc.search(Some("top".to_string()), 1, 10).await {
            OperationResult::SuccessList(items, info) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "Laptops");
                assert_eq!(info.total, 1);
            }
            other => panic!("expected SuccessList, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let repos = seeded_provider().await;
        let svc = service(repos);

        assert!(matches!(svc.find_by_id(999).await, OperationResult::NotFound));
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let repos = seeded_provider().await;
        let svc = service(repos);

        let result = svc
            .update(
                999,
                CategoryChanges {
                    name: "Anything".to_string(),
                },
            )
            .await;
        assert!(matches!(result, OperationResult::NotFound));
    }

    #[tokio::test]
    async fn update_allows_keeping_own_name() {
        let repos = seeded_provider().await;
        let svc = service(repos);

        let result = svc
            .update(
                1,
                CategoryChanges {
                    name: "Mobiles".to_string(),
                },
            )
            .await;
        assert!(matches!(result, OperationResult::Success(_)));
    }

    #[tokio::test]
    async fn update_rejects_name_taken_by_another_record() {
        let repos = seeded_provider().await;
        let svc = service(repos);

        let result = svc
            .update(
                1,
                CategoryChanges {
                    name: "Laptops".to_string(),
                },
            )
            .await;
        match result {
            OperationResult::ValidationFailed(errors) => {
                assert_eq!(errors[0].code, AppErrorCode::ValueExists);
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_with_dependent_products_is_blocked() {
        let repos = seeded_provider().await;
        repos
            .products()
            .insert(NewProduct {
                name: "Samsung Galaxy S5".to_string(),
                price: 4500.0,
                category_id: 1,
            })
            .await
            .unwrap();
        let svc = service(repos.clone());

        match svc.delete(1).await {
            OperationResult::ValidationFailed(errors) => {
                assert_eq!(errors[0].code, AppErrorCode::CantBeDeleted);
                assert_eq!(errors[0].source, None);
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }

        // Both entities are unchanged.
        assert!(repos.categories().exists_by_id(1).await.unwrap());
        assert_eq!(
            repos
                .products()
                .count_matching(&ProductFilter::in_category(1))
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn delete_returns_the_removed_category() {
        let repos = seeded_provider().await;
        let svc = service(repos.clone());

        match svc.delete(3).await {
            OperationResult::Success(category) => assert_eq!(category.name, "TVs"),
            other => panic!("expected Success, got {:?}", other),
        }
        assert!(!repos.categories().exists_by_id(3).await.unwrap());
    }

    #[tokio::test]
    async fn backend_fault_is_captured_not_propagated() {
        let svc = service(failing_provider());

        match svc.search(None, 1, 10).await {
            OperationResult::Failed(_) => {}
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(matches!(svc.find_by_id(1).await, OperationResult::Failed(_)));
    }
}
