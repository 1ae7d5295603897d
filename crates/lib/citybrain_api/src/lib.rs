//! # citybrain_api
//!
//! HTTP API library for CityBrain.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chat, health, insights};

/// Shared application state passed to all handlers.
///
/// `pool` is `None` when the database was unreachable at startup; the service
/// then runs in degraded mode with no persistence.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool, if the connect at startup succeeded.
    pub pool: Option<PgPool>,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `citybrain_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    citybrain_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::home))
        .route("/health", get(health::health))
        .route("/citybrain", post(chat::citybrain))
        .route("/citybrain-simple", post(chat::citybrain_simple))
        .route("/citybrain/history", get(chat::history))
        .route("/insights", get(insights::city_insights))
        .layer(cors)
        .with_state(state)
}
