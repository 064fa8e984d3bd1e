//! Product DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{NewProduct, Product, ProductChanges};
use crate::interfaces::http::modules::categories::CategoryResponse;

/// Product as returned by the API, with its category bound when it exists.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            category_id: product.category_id,
            category: product.category.map(CategoryResponse::from),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 50, message = "product name must be 1-50 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
    pub category_id: i64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            category_id: req.category_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 50, message = "product name must be 1-50 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
    pub category_id: i64,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            category_id: req.category_id,
        }
    }
}

/// Search query parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchProductsParams {
    /// Name or name fragment to match (case-insensitive).
    pub name: Option<String>,
    /// Comma-separated category ids; absent means all categories.
    pub categories: Option<String>,
    /// 1-based page number; absent or 0 reads as page 1.
    #[serde(default)]
    pub page: i64,
    /// Items per page; absent or 0 returns no rows.
    #[serde(default)]
    pub page_size: i64,
}
