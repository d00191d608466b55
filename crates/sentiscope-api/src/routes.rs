//! HTTP routes and handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::state::AppState;
use sentiscope_core::round_dp;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze", post(analyze))
        .route("/api/v1/batch", post(batch_analyze))
        .route("/api/v1/stats", get(stats))
        .route("/metrics", get(metrics))
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Single text analysis request
#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    text: String,

    /// Include the emotions block in the response
    #[serde(default = "default_true")]
    include_emotions: bool,

    /// Include the advanced keywords block in the response
    #[serde(default = "default_true")]
    include_keywords: bool,
}

/// Batch analysis request
#[derive(Debug, Deserialize)]
struct BatchAnalyzeRequest {
    texts: Vec<String>,

    #[serde(default = "default_true")]
    include_emotions: bool,

    #[serde(default = "default_true")]
    include_keywords: bool,
}

fn default_true() -> bool {
    true
}

/// Single analysis response envelope
#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    success: bool,
    data: serde_json::Value,
    timestamp: String,
    processing_time_ms: f64,
}

/// Batch analysis response envelope
#[derive(Debug, Serialize)]
struct BatchAnalyzeResponse {
    success: bool,
    results: Vec<serde_json::Value>,
    total_processed: usize,
    timestamp: String,
    processing_time_ms: f64,
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let start = Instant::now();
    metrics::counter!("sentiscope_requests_total", "endpoint" => "analyze").increment(1);

    let profile = state.analyzer.analyze(&req.text)?;
    state.analyses_total.fetch_add(1, Ordering::Relaxed);

    let mut data = serde_json::to_value(&profile).map_err(sentiscope_core::Error::from)?;
    filter_profile(&mut data, req.include_emotions, req.include_keywords);

    let elapsed = start.elapsed();
    metrics::histogram!("sentiscope_analysis_latency_us").record(elapsed.as_micros() as f64);
    debug!(latency_us = elapsed.as_micros() as u64, "analysis complete");

    Ok(Json(AnalyzeResponse {
        success: true,
        data,
        timestamp: Utc::now().to_rfc3339(),
        processing_time_ms: round_dp(elapsed.as_secs_f64() * 1000.0, 2),
    }))
}

async fn batch_analyze(
    State(state): State<AppState>,
    Json(req): Json<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalyzeResponse>, ApiError> {
    let start = Instant::now();
    metrics::counter!("sentiscope_requests_total", "endpoint" => "batch").increment(1);

    if req.texts.is_empty() {
        return Err(ApiError::bad_request("Texts list cannot be empty"));
    }
    let max = state.config.max_batch_size;
    if req.texts.len() > max {
        return Err(ApiError::bad_request(format!(
            "Maximum {max} texts per batch"
        )));
    }

    let records = state.analyzer.batch_analyze(&req.texts)?;
    let analyzed = records.iter().filter(|r| !r.is_failed()).count() as u64;
    state.analyses_total.fetch_add(analyzed, Ordering::Relaxed);

    let mut results = Vec::with_capacity(records.len());
    for record in &records {
        let mut value = serde_json::to_value(record).map_err(sentiscope_core::Error::from)?;
        filter_profile(&mut value, req.include_emotions, req.include_keywords);
        results.push(value);
    }

    let elapsed = start.elapsed();
    info!(total = results.len(), analyzed, "batch complete");

    Ok(Json(BatchAnalyzeResponse {
        success: true,
        total_processed: results.len(),
        results,
        timestamp: Utc::now().to_rfc3339(),
        processing_time_ms: round_dp(elapsed.as_secs_f64() * 1000.0, 2),
    }))
}

async fn stats(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "data": {
            "api_version": env!("CARGO_PKG_VERSION"),
            "engine": state.analyzer.engine().name(),
            "analyses_total": state.analyses_total.load(Ordering::Relaxed),
            "uptime_secs": state.started.elapsed().as_secs(),
            "features": [
                "Single text analysis",
                "Batch processing",
                "Emotion detection",
                "Advanced keyword extraction",
            ],
        },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

async fn fallback() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Endpoint not found",
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}

/// Drop response blocks the caller opted out of.
fn filter_profile(value: &mut serde_json::Value, include_emotions: bool, include_keywords: bool) {
    if let Some(obj) = value.as_object_mut() {
        if !include_emotions {
            obj.remove("emotions");
        }
        if !include_keywords {
            obj.remove("advanced_keywords");
        }
    }
}

/// Error envelope for all handlers
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<sentiscope_core::Error> for ApiError {
    fn from(err: sentiscope_core::Error) -> Self {
        metrics::counter!("sentiscope_errors_total").increment(1);
        match err {
            sentiscope_core::Error::InvalidInput(message) => Self {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "error": self.message,
            "timestamp": Utc::now().to_rfc3339(),
        });
        (self.status, Json(body)).into_response()
    }
}
