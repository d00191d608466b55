//! End-to-end tests for the HTTP API.
//!
//! Each test builds the full router with a fresh analyzer and drives it
//! through tower's `oneshot`, no socket involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use sentiscope_analyzer::SentimentAnalyzer;
use sentiscope_api::{create_router, ApiConfig, AppState};

fn test_router() -> Router {
    // build_recorder avoids the global-recorder slot so tests stay isolated
    let metrics_handle = PrometheusBuilder::new().build_recorder().handle();
    let analyzer = Arc::new(SentimentAnalyzer::with_default_engine().unwrap());
    let state = AppState::new(analyzer, ApiConfig::default(), metrics_handle);
    create_router(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn analyze_happy_path() {
    let app = test_router();
    let response = app
        .oneshot(post_json(
            "/api/v1/analyze",
            json!({"text": "I love this amazing product!"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["label"], "Positive");
    assert!(body["data"]["emotions"].is_object());
    assert!(body["data"]["advanced_keywords"].is_object());
    assert!(body["processing_time_ms"].is_number());
}

#[tokio::test]
async fn analyze_empty_text_is_bad_request() {
    let app = test_router();
    let response = app
        .oneshot(post_json("/api/v1/analyze", json!({"text": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Text input cannot be empty");
}

#[tokio::test]
async fn analyze_respects_include_flags() {
    let app = test_router();
    let response = app
        .oneshot(post_json(
            "/api/v1/analyze",
            json!({
                "text": "Great service overall.",
                "include_emotions": false,
                "include_keywords": false,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let data = body["data"].as_object().unwrap();
    assert!(!data.contains_key("emotions"));
    assert!(!data.contains_key("advanced_keywords"));
    assert!(data.contains_key("label"));
}

#[tokio::test]
async fn batch_mixes_successes_and_failures() {
    let app = test_router();
    let response = app
        .oneshot(post_json(
            "/api/v1/batch",
            json!({"texts": ["This is wonderful!", "", "Terrible experience."]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_processed"], 3);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["label"], "Positive");
    assert_eq!(results[1]["error"], "Text input cannot be empty");
    assert_eq!(results[2]["label"], "Negative");
}

#[tokio::test]
async fn batch_rejects_empty_list() {
    let app = test_router();
    let response = app
        .oneshot(post_json("/api/v1/batch", json!({"texts": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Texts list cannot be empty");
}

#[tokio::test]
async fn batch_rejects_oversized_list() {
    let app = test_router();
    let texts: Vec<String> = (0..101).map(|i| format!("text {i}")).collect();
    let response = app
        .oneshot(post_json("/api/v1/batch", json!({ "texts": texts })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Maximum 100 texts per batch");
}

#[tokio::test]
async fn stats_reports_analysis_count() {
    let app = test_router();

    let response = app
        .clone()
        .oneshot(post_json("/api/v1/analyze", json!({"text": "Nice."})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["analyses_total"], 1);
    assert!(body["data"]["engine"].is_string());
}

#[tokio::test]
async fn unknown_route_gets_json_envelope() {
    let app = test_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn metrics_endpoint_renders_prometheus_text() {
    let app = test_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
