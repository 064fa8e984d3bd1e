//! Catalog service entry point
//!
//! Reads configuration from a TOML file
//! (~/.config/catalog-service/config.toml), selects a storage backend and
//! serves the REST API.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use catalog_service::application::{CategoryService, ProductService};
use catalog_service::domain::RepositoryProvider;
use catalog_service::infrastructure::database::migrator::Migrator;
use catalog_service::infrastructure::{
    init_database, DatabaseConfig, DocumentClient, DocumentRepositoryProvider,
    MemoryRepositoryProvider, SeaOrmRepositoryProvider,
};
use catalog_service::{
    create_api_router, default_config_path, AppConfig, CatalogState, StorageBackend,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CATALOG_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting catalog service...");

    // ── Storage backend ────────────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = match cfg.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage seeded with the demo catalog");
            Arc::new(MemoryRepositoryProvider::seeded())
        }
        StorageBackend::Database => {
            let db_config = DatabaseConfig {
                url: cfg.database.url.clone(),
            };
            let db = init_database(&db_config).await?;
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
            Arc::new(SeaOrmRepositoryProvider::new(db))
        }
        StorageBackend::Document => {
            let client =
                DocumentClient::connect(&cfg.document.url, &cfg.document.key_prefix).await?;
            Arc::new(DocumentRepositoryProvider::new(client))
        }
    };

    // ── Services & router ──────────────────────────────────────
    let state = CatalogState {
        categories: Arc::new(CategoryService::new(repos.clone())),
        products: Arc::new(ProductService::new(repos)),
        backend: cfg.storage.backend.as_str(),
    };
    let router = create_api_router(state);

    // ── Serve with graceful shutdown ───────────────────────────
    let addr = cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Catalog service shutdown complete");
    Ok(())
}

/// Completes on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
