//! Lafaek Content Backend
//!
//! REST backend for the Lafaek bilingual learning website: content
//! collections with SQLite persistence, an admin save surface, and
//! presigned direct-to-storage media uploads.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod lightbox;
pub mod listing;
pub mod media;
pub mod models;
pub mod session;
pub mod storage;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use models::{GalleryPhoto, JobPosting, Magazine, MagazineRequest, Story, TeamMember};
use storage::{S3Storage, StorageClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub storage: Arc<dyn StorageClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lafaek content backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Media origin: {}", config.media_origin);

    // Warn if the admin key is not configured
    if config.admin_key.is_none() {
        tracing::warn!("No admin key configured (LAFAEK_ADMIN_KEY). Admin API is unprotected!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Initialize object storage
    let storage: Arc<dyn StorageClient> = Arc::new(
        S3Storage::new(config.upload_bucket.clone(), config.s3_endpoint.clone()).await,
    );
    tracing::info!("Presigning uploads for bucket {}", config.upload_bucket);

    // Create application state
    let state = AppState {
        repo,
        storage,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the key for the auth layer
    let admin_key = state.config.admin_key.clone();

    // Admin surface: full listings, whole-collection saves, upload presigning
    let admin_routes = Router::new()
        .route("/magazines", get(api::list_admin::<Magazine>))
        .route("/magazines", put(api::save_collection::<Magazine>))
        .route("/jobs", get(api::list_admin::<JobPosting>))
        .route("/jobs", put(api::save_collection::<JobPosting>))
        .route("/gallery", get(api::list_admin::<GalleryPhoto>))
        .route("/gallery", put(api::save_collection::<GalleryPhoto>))
        .route("/stories", get(api::list_admin::<Story>))
        .route("/stories", put(api::save_collection::<Story>))
        .route("/team", get(api::list_admin::<TeamMember>))
        .route("/team", put(api::save_collection::<TeamMember>))
        .route("/requests", get(api::list_admin::<MagazineRequest>))
        .route("/requests", put(api::save_collection::<MagazineRequest>))
        .route("/uploads/presign", post(api::presign_upload))
        // Apply admin-key middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_key_layer(admin_key.clone(), req, next)
        }));

    // Public listings: visibility-filtered, media URLs resolved
    let api_routes = Router::new()
        .route("/magazines", get(api::list_public::<Magazine>))
        .route("/jobs", get(api::list_public::<JobPosting>))
        .route("/gallery", get(api::list_public::<GalleryPhoto>))
        .route("/stories", get(api::list_public::<Story>))
        .route("/team", get(api::list_public::<TeamMember>))
        .nest("/admin", admin_routes);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
