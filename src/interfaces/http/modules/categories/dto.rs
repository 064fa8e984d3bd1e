//! Category DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Category, CategoryChanges, NewCategory};

/// Category as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "category name must be 1-50 characters"))]
    pub name: String,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self { name: req.name }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "category name must be 1-50 characters"))]
    pub name: String,
}

impl From<UpdateCategoryRequest> for CategoryChanges {
    fn from(req: UpdateCategoryRequest) -> Self {
        Self { name: req.name }
    }
}

/// Search query parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchCategoriesParams {
    /// Name or name fragment to match.
    pub name: Option<String>,
    /// 1-based page number; absent or 0 reads as page 1.
    #[serde(default)]
    pub page: i64,
    /// Items per page; absent or 0 returns no rows.
    #[serde(default)]
    pub page_size: i64,
}
