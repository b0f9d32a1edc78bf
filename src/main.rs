//! Soaring Eagles Club Site Backend
//!
//! REST backend for the club's public pages and admin area: registration
//! intake backed by SQLite, file-backed content storage for projects and
//! timeline events, and session-based admin authentication.

mod api;
mod auth;
mod config;
mod content;
mod db;
mod errors;
mod export;
mod models;
mod sync;
mod validation;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionManager;
use config::Config;
use content::ContentStore;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub content: Arc<ContentStore>,
    pub sessions: Arc<SessionManager>,
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

    tracing::info!("Starting Soaring Eagles backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Content dir: {:?}", config.content_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if admin credentials are not configured
    if config.admin_email.is_none() || config.admin_password.is_none() {
        tracing::warn!(
            "Admin credentials not configured (EAGLES_ADMIN_EMAIL / EAGLES_ADMIN_PASSWORD). Admin sign-in is disabled!"
        );
    }

    // Initialize registration database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Initialize content store
    let content = Arc::new(ContentStore::open(&config.content_dir)?);

    // Initialize session manager
    let sessions = Arc::new(SessionManager::new(&config));

    // Create application state
    let state = AppState {
        repo,
        content,
        sessions,
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

    // Clone the session manager for the auth layer
    let sessions = state.sessions.clone();

    // Admin routes: select/delete on registrations and every content
    // mutation require an authenticated session
    let admin_routes = Router::new()
        // Registrations
        .route("/registrations/workshop", get(api::list_workshop))
        .route("/registrations/workshop/csv", get(api::export_workshop_csv))
        .route("/registrations/workshop/{id}", delete(api::delete_workshop))
        .route("/registrations/recruitment", get(api::list_recruitment))
        .route(
            "/registrations/recruitment/csv",
            get(api::export_recruitment_csv),
        )
        .route(
            "/registrations/recruitment/{id}",
            delete(api::delete_recruitment),
        )
        // Content
        .route("/projects", post(api::create_project))
        .route("/projects/{id}", put(api::update_project))
        .route("/projects/{id}", delete(api::delete_project))
        .route("/timeline", post(api::create_timeline_event))
        .route("/timeline/{id}", put(api::update_timeline_event))
        .route("/timeline/{id}", delete(api::delete_timeline_event))
        // Maintenance
        .route("/sync", post(api::run_sync))
        .route("/content/export", get(api::export_content))
        .route("/content/import", post(api::import_content))
        .route("/logout", post(api::logout))
        // Apply session auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(sessions.clone(), req, next)
        }));

    // Public routes: form submissions are open inserts, content reads feed
    // the public pages
    let public_routes = Router::new()
        .route("/auth/login", post(api::login))
        .route("/auth/session", get(api::get_session))
        .route("/registrations/workshop", post(api::submit_workshop))
        .route("/registrations/recruitment", post(api::submit_recruitment))
        .route("/projects", get(api::list_projects))
        .route("/timeline", get(api::list_timeline_events));

    let api_routes = public_routes.nest("/admin", admin_routes);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.request_timeout))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
