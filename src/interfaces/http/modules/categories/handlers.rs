//! Category REST API handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Response;

use super::dto::{
    CategoryResponse, CreateCategoryRequest, SearchCategoriesParams, UpdateCategoryRequest,
};
use crate::application::CategoryService;
use crate::interfaces::http::common::{respond, ApiResponse, ValidatedJson};

/// Category handler state
#[derive(Clone)]
pub struct CategoriesState {
    pub service: Arc<CategoryService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Categories",
    params(SearchCategoriesParams),
    responses(
        (status = 200, description = "Matching categories", body = ApiResponse<Vec<CategoryResponse>>)
    )
)]
pub async fn search_categories(
    State(state): State<CategoriesState>,
    Query(params): Query<SearchCategoriesParams>,
) -> Response {
    let result = state
        .service
        .search(params.name, params.page, params.page_size)
        .await;
    respond(result.map(CategoryResponse::from))
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Created category", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation failed", body = ApiResponse<CategoryResponse>)
    )
)]
pub async fn create_category(
    State(state): State<CategoriesState>,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Response {
    let result = state.service.create(req.into()).await;
    respond(result.map(CategoryResponse::from))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn find_category(
    State(state): State<CategoriesState>,
    Path(id): Path<i64>,
) -> Response {
    let result = state.service.find_by_id(id).await;
    respond(result.map(CategoryResponse::from))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Updated category", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation failed", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_category(
    State(state): State<CategoriesState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateCategoryRequest>,
) -> Response {
    let result = state.service.update(id, req.into()).await;
    respond(result.map(CategoryResponse::from))
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Deleted category", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Category still has products", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_category(
    State(state): State<CategoriesState>,
    Path(id): Path<i64>,
) -> Response {
    let result = state.service.delete(id).await;
    respond(result.map(CategoryResponse::from))
}
