//! Product REST API handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Response;

use super::dto::{
    CreateProductRequest, ProductResponse, SearchProductsParams, UpdateProductRequest,
};
use crate::application::ProductService;
use crate::interfaces::http::common::{respond, ApiResponse, ValidatedJson};
use crate::shared::utills::parse_id_list;

/// Product handler state
#[derive(Clone)]
pub struct ProductsState {
    pub service: Arc<ProductService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    params(SearchProductsParams),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<Vec<ProductResponse>>)
    )
)]
pub async fn search_products(
    State(state): State<ProductsState>,
    Query(params): Query<SearchProductsParams>,
) -> Response {
    let category_ids = params
        .categories
        .as_deref()
        .map(parse_id_list)
        .unwrap_or_default();

    let result = state
        .service
        .search(params.name, category_ids, params.page, params.page_size)
        .await;
    respond(result.map(ProductResponse::from))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created product", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed", body = ApiResponse<ProductResponse>)
    )
)]
pub async fn create_product(
    State(state): State<ProductsState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> Response {
    let result = state.service.create(req.into()).await;
    respond(result.map(ProductResponse::from))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn find_product(State(state): State<ProductsState>, Path(id): Path<i64>) -> Response {
    let result = state.service.find_by_id(id).await;
    respond(result.map(ProductResponse::from))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_product(
    State(state): State<ProductsState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateProductRequest>,
) -> Response {
    let result = state.service.update(id, req.into()).await;
    respond(result.map(ProductResponse::from))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted product", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_product(State(state): State<ProductsState>, Path(id): Path<i64>) -> Response {
    let result = state.service.delete(id).await;
    respond(result.map(ProductResponse::from))
}
