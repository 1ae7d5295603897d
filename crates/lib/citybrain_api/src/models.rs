//! API request and response models.
//!
//! Wire shapes follow the original CityOS endpoints: snake_case fields,
//! `success` flag on chat responses.

use serde::{Deserialize, Serialize};

use citybrain_core::chat_log::ChatRecordRow;
use citybrain_core::insights::Insight;

/// Error body returned by [`crate::error::AppError`].
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `POST /citybrain` request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub question: String,
}

/// `POST /citybrain-simple` request body.
#[derive(Debug, Deserialize)]
pub struct SimpleChatRequest {
    pub question: String,
}

/// Chat response. Canonical contract: `answer` plus a `success` flag.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub success: bool,
}

/// `GET /` service descriptor.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub service: String,
    pub version: String,
    pub status: String,
}

/// `GET /health` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// `"connected"` or `"disconnected"`, from whether the pool handle is
    /// held. No live probe is made at call time.
    pub database: String,
    pub ai_engine: String,
    pub message: String,
}

/// `GET /citybrain/history` response.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub records: Vec<ChatRecordRow>,
    pub total: i64,
}

/// `GET /insights` response.
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
    pub total_questions: i64,
}
