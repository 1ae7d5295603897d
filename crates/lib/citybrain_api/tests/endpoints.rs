//! Integration tests — build the router in degraded mode (no database) and
//! exercise every endpoint. Answers must be identical with or without
//! storage, so no live PostgreSQL is needed here.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use citybrain_api::{AppState, config::ApiConfig};
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState {
        pool: None,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: "postgres://localhost:5432/cityos".into(),
        },
    };
    citybrain_api::router(state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&body).expect("parse JSON"))
}

async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&body).expect("parse JSON"))
}

#[tokio::test]
async fn home_returns_service_descriptor() {
    let (status, json) = get_json(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["service"], "CityBrain AI Engine");
    assert_eq!(json["status"], "live");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn health_reports_disconnected_without_pool() {
    let (status, json) = get_json(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "disconnected");
    assert_eq!(json["ai_engine"], "keyword-match");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn greeting_question_gets_greeting_answer() {
    let (status, json) = post_json(
        app(),
        "/citybrain",
        serde_json::json!({"user_id": "u1", "question": "Hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let answer = json["answer"].as_str().expect("answer is string");
    assert!(answer.contains("CityBrain"), "unexpected answer: {answer}");
}

#[tokio::test]
async fn keyword_question_gets_topic_answer() {
    let (status, json) = post_json(
        app(),
        "/citybrain",
        serde_json::json!({"user_id": "u1", "question": "There is a garbage problem"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let answer = json["answer"].as_str().expect("answer is string");
    assert!(answer.contains("Sanitation"), "unexpected answer: {answer}");
}

#[tokio::test]
async fn unmatched_question_gets_fallback() {
    let (status, json) = post_json(
        app(),
        "/citybrain",
        serde_json::json!({"user_id": "u1", "question": "xyz123"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let answer = json["answer"].as_str().expect("answer is string");
    assert!(
        answer.contains("Could you describe the issue"),
        "unexpected answer: {answer}"
    );
}

#[tokio::test]
async fn simple_endpoint_delegates_with_constant_user() {
    let (_, full) = post_json(
        app(),
        "/citybrain",
        serde_json::json!({"user_id": "web_user", "question": "hey"}),
    )
    .await;
    let (status, simple) = post_json(
        app(),
        "/citybrain-simple",
        serde_json::json!({"question": "hey"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(simple["answer"], full["answer"]);
    assert_eq!(simple["success"], true);
}

#[tokio::test]
async fn history_is_unavailable_in_degraded_mode() {
    let (status, json) = get_json(app(), "/citybrain/history?user_id=u1").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "db_unavailable");
}

#[tokio::test]
async fn insights_are_unavailable_in_degraded_mode() {
    let (status, json) = get_json(app(), "/insights").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "db_unavailable");
}

#[tokio::test]
async fn malformed_chat_body_is_rejected_before_dispatch() {
    // Missing `question` — rejected by the Json extractor.
    let req = Request::builder()
        .method("POST")
        .uri("/citybrain")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"user_id": "u1"}"#))
        .unwrap();

    let resp = app().oneshot(req).await.expect("request");
    assert!(resp.status().is_client_error());
}
