//! Shared application state

use crate::config::ApiConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use sentiscope_analyzer::SentimentAnalyzer;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Instant;

/// State shared across request handlers.
///
/// The analyzer is stateless, so one instance serves all requests
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentimentAnalyzer>,
    pub config: Arc<ApiConfig>,
    pub metrics_handle: PrometheusHandle,
    pub started: Instant,
    pub analyses_total: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(
        analyzer: Arc<SentimentAnalyzer>,
        config: ApiConfig,
        metrics_handle: PrometheusHandle,
    ) -> Self {
        Self {
            analyzer,
            config: Arc::new(config),
            metrics_handle,
            started: Instant::now(),
            analyses_total: Arc::new(AtomicU64::new(0)),
        }
    }
}
