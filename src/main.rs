//! Enterprise Intelligence Platform API
//!
//! Thin HTTP facade over the enterprise reporting database, serving HR
//! payroll data and network-security analytics. Runs against a live
//! database when one is reachable, otherwise degrades to mock mode and
//! serves synthetic data so the frontend keeps working in demos and
//! local development.

mod config;
mod db;
mod error;
mod handlers;
mod models;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enterprise_intel_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Enterprise Intelligence Platform API starting...");

    // Build the database gateway. Connection failure is tolerated here:
    // the service degrades to mock mode rather than refusing to start.
    let db = if config.mock_mode {
        tracing::info!("mock mode configured, no database connection attempted");
        db::Db::mock()
    } else {
        match db::Db::connect(&config.database_url()).await {
            Ok(db) => {
                tracing::info!("connected to database at {}", config.db_dsn);
                db
            }
            Err(reason) => {
                tracing::warn!("{reason}; falling back to mock mode");
                db::Db::mock()
            }
        }
    };

    let state = AppState {
        db: db.clone(),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();

    db.close().await;
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let hr_routes = Router::new()
        .route(
            "/employees",
            get(handlers::hr::list_employees).post(handlers::hr::create_employee),
        )
        .route("/payroll/calculate", post(handlers::hr::calculate_payroll))
        .route("/reports/salary", get(handlers::hr::salary_report));

    let security_routes = Router::new()
        .route("/logs", get(handlers::security::recent_logs))
        .route("/predictions", get(handlers::security::predictions))
        .route("/stats", get(handlers::security::attack_stats));

    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::health::root))
        .nest("/api/hr", hr_routes)
        .nest("/api/security", security_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Permissive CORS for the configured frontend origins. Credentials are
/// allowed, so methods and headers mirror the request instead of using a
/// wildcard.
fn cors_layer(config: &config::Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
