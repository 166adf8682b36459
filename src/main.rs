//! Cloudburst Prediction API
//!
//! Looks up a city's weather attributes in PostgreSQL, runs them through a
//! pre-fit scaler and binary classifier, and reports a cloudburst risk tier.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 CLOUDBURST PREDICTION API                │
//! ├──────────────────────────────────────────────────────────┤
//! │  GET /predict?city=...                                   │
//! │      │                                                   │
//! │      ▼                                                   │
//! │  ┌─────────┐   ┌──────────┐   ┌────────────────────────┐ │
//! │  │ Weather │──▶│  Scaler  │──▶│  Classifier (pre-fit   │ │
//! │  │  Store  │   │ (pre-fit │   │  random forest)        │ │
//! │  │ (Axum + │   │  affine) │   │                        │ │
//! │  │  sqlx)  │   └──────────┘   └────────────────────────┘ │
//! │  └────┬────┘                                             │
//! │       ▼                                                  │
//! │  ┌────────────┐                                          │
//! │  │ PostgreSQL │   (read-only `weather` table)            │
//! │  └────────────┘                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod error;
mod handlers;
mod ml;
mod models;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};
use ml::{Classifier, Scaler};
use store::WeatherStore;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "cloudburst_api=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Cloudburst Prediction API starting...");
    tracing::info!("Database: {}", config.database_url.split('@').last().unwrap_or("***"));

    // Load pre-fit artifacts once; they are read-only for the process lifetime
    let scaler = ml::StandardScaler::load(&config.scaler_path)
        .expect("Failed to load scaler artifact");
    let classifier = ml::RandomForestModel::load(&config.model_path)
        .expect("Failed to load classifier artifact");
    tracing::info!("Model artifacts loaded ({}, {})", config.scaler_path, config.model_path);

    // Initialize database pool
    let pool = db::create_pool(&config.database_url).await
        .expect("Failed to create database pool");

    // Build application state
    let state = AppState {
        store: Arc::new(store::PgWeatherStore::new(pool)),
        scaler: Arc::new(scaler),
        classifier: Arc::new(classifier),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
///
/// Everything a request needs is injected here at startup; there are no
/// module-level globals. Artifacts are never mutated after loading, so
/// sharing them across requests needs no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WeatherStore>,
    pub scaler: Arc<dyn Scaler>,
    pub classifier: Arc<dyn Classifier>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::home))
        .route("/health", get(handlers::health::check))
        .route("/predict", get(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
