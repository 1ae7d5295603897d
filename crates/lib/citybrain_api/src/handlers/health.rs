//! Service descriptor and health endpoints.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::{HealthResponse, ServiceDescriptor};

/// `GET /` — static service descriptor.
pub async fn home() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: "CityBrain AI Engine".into(),
        version: citybrain_core::version().into(),
        status: "live".into(),
    })
}

/// `GET /health` — status plus database reachability.
///
/// `database` reflects whether the connection handle was established at
/// startup; the store itself is not probed here, so the field can go stale
/// after a failed startup connect. That staleness is accepted.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.pool.is_some() {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthResponse {
        status: "ok".into(),
        database: database.into(),
        ai_engine: "keyword-match".into(),
        message: "CityBrain is running".into(),
    })
}
