//! Chat record persistence.
//!
//! Append-only log of exchanges. Writes are best-effort: the caller decides
//! what to do with a failure (the API layer logs and drops it).

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Row returned by chat record queries.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct ChatRecordRow {
    pub id: Uuid,
    pub user_id: String,
    pub question: String,
    pub answer: String,
    pub topic: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-topic question count for the insights report.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TopicCount {
    pub topic: Option<String>,
    pub count: i64,
}

/// Append one exchange to the log.
///
/// IDs are UUIDv7 generated app-side so rows sort by insertion time.
pub async fn record_exchange(
    pool: &PgPool,
    user_id: &str,
    question: &str,
    answer: &str,
    topic: Option<&str>,
) -> Result<ChatRecordRow, sqlx::Error> {
    sqlx::query_as::<_, ChatRecordRow>(
        r#"
        INSERT INTO chat_records (id, user_id, question, answer, topic)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, question, answer, topic, created_at
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(user_id)
    .bind(question)
    .bind(answer)
    .bind(topic)
    .fetch_one(pool)
    .await
}

/// List the most recent records for a user, newest first.
pub async fn list_recent(
    pool: &PgPool,
    user_id: &str,
    limit: i64,
) -> Result<(Vec<ChatRecordRow>, i64), sqlx::Error> {
    let total =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chat_records WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    let rows = sqlx::query_as::<_, ChatRecordRow>(
        r#"
        SELECT id, user_id, question, answer, topic, created_at
        FROM chat_records
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

/// Question counts grouped by topic. `topic IS NULL` groups greetings and
/// fallback replies together.
pub async fn topic_counts(pool: &PgPool) -> Result<Vec<TopicCount>, sqlx::Error> {
    sqlx::query_as::<_, TopicCount>(
        r#"
        SELECT topic, COUNT(*) AS count
        FROM chat_records
        GROUP BY topic
        ORDER BY count DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
