//! Chat request handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::warn;

use citybrain_core::{chat_log, dispatch};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ChatResponse, HistoryResponse, SimpleChatRequest};

/// User id recorded for `/citybrain-simple` calls.
const WEB_USER: &str = "web_user";

/// Default and maximum page sizes for `/citybrain/history`.
const DEFAULT_HISTORY_LIMIT: i64 = 20;
const MAX_HISTORY_LIMIT: i64 = 100;

/// `POST /citybrain` — answer a question and log the exchange.
pub async fn citybrain(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    Ok(Json(answer_and_log(&state, &body.user_id, &body.question)))
}

/// `POST /citybrain-simple` — same as `/citybrain` with a constant user id.
pub async fn citybrain_simple(
    State(state): State<AppState>,
    Json(body): Json<SimpleChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    Ok(Json(answer_and_log(&state, WEB_USER, &body.question)))
}

/// Dispatch the question and fire-and-forget the log write.
///
/// The write runs on a spawned task so its outcome can never affect the
/// response. With no pool (degraded mode) it is skipped silently.
fn answer_and_log(state: &AppState, user_id: &str, question: &str) -> ChatResponse {
    let reply = dispatch::dispatch(question);

    if let Some(pool) = &state.pool {
        let pool = pool.clone();
        let user_id = user_id.to_string();
        let question = question.to_string();
        tokio::spawn(async move {
            if let Err(e) =
                chat_log::record_exchange(&pool, &user_id, &question, reply.answer, reply.topic)
                    .await
            {
                warn!(user_id = %user_id, "failed to log chat exchange: {e}");
            }
        });
    }

    ChatResponse {
        answer: reply.answer.to_string(),
        success: true,
    }
}

/// Query parameters for `/citybrain/history`.
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub user_id: String,
    pub limit: Option<i64>,
}

/// `GET /citybrain/history` — most recent exchanges for a user, newest first.
pub async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> AppResult<Json<HistoryResponse>> {
    let pool = state
        .pool
        .as_ref()
        .ok_or_else(|| AppError::DbUnavailable("running without persistence".into()))?;

    let limit = params
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT);

    let (records, total) = chat_log::list_recent(pool, &params.user_id, limit).await?;

    Ok(Json(HistoryResponse { records, total }))
}
