//! City insights endpoint.

use axum::Json;
use axum::extract::State;

use citybrain_core::{chat_log, insights};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::InsightsResponse;

/// `GET /insights` — rule-based insights aggregated from the chat log.
pub async fn city_insights(State(state): State<AppState>) -> AppResult<Json<InsightsResponse>> {
    let pool = state
        .pool
        .as_ref()
        .ok_or_else(|| AppError::DbUnavailable("running without persistence".into()))?;

    let counts = chat_log::topic_counts(pool).await?;
    let total_questions = counts.iter().map(|c| c.count).sum();
    let insights = insights::generate_insights(&counts);

    Ok(Json(InsightsResponse {
        insights,
        total_questions,
    }))
}
