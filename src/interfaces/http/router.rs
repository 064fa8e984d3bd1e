//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{CategoryService, ProductService};
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::categories::{self, CategoriesState};
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::products::{self, ProductsState};
use crate::shared::types::{PageInfo, ValidationError};

/// Unified state for all catalog routes.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct CatalogState {
    pub categories: Arc<CategoryService>,
    pub products: Arc<ProductService>,
    /// Name of the storage backend the service was started with.
    pub backend: &'static str,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<CatalogState> for CategoriesState {
    fn from_ref(s: &CatalogState) -> Self {
        CategoriesState {
            service: Arc::clone(&s.categories),
        }
    }
}

impl FromRef<CatalogState> for ProductsState {
    fn from_ref(s: &CatalogState) -> Self {
        ProductsState {
            service: Arc::clone(&s.products),
        }
    }
}

impl FromRef<CatalogState> for HealthState {
    fn from_ref(s: &CatalogState) -> Self {
        HealthState { backend: s.backend }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Categories
        categories::search_categories,
        categories::create_category,
        categories::find_category,
        categories::update_category,
        categories::delete_category,
        // Products
        products::search_products,
        products::create_product,
        products::find_product,
        products::update_product,
        products::delete_product,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PageInfo,
            ValidationError,
            // Categories
            categories::CategoryResponse,
            categories::CreateCategoryRequest,
            categories::UpdateCategoryRequest,
            // Products
            products::ProductResponse,
            products::CreateProductRequest,
            products::UpdateProductRequest,
            // Health
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Categories", description = "Category CRUD operations"),
        (name = "Products", description = "Product CRUD operations"),
    ),
    info(
        title = "Catalog Service API",
        version = "0.1.0",
        description = "REST API for managing a categories/products catalog",
        license(name = "MIT"),
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: CatalogState) -> Router {
    // Permissive CORS: this is a reference service without an auth surface.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(health::health_check))
        .route(
            "/api/v1/categories",
            get(categories::search_categories).post(categories::create_category),
        )
        .route(
            "/api/v1/categories/{id}",
            get(categories::find_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/api/v1/products",
            get(products::search_products).post(products::create_product),
        )
        .route(
            "/api/v1/products/{id}",
            get(products::find_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
