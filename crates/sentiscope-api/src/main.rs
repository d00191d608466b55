//! SentiScope API server
//!
//! REST front end for the sentiment analysis pipeline: single and batch
//! analysis, health, stats and Prometheus metrics.

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use sentiscope_analyzer::SentimentAnalyzer;
use sentiscope_api::{create_router, ApiConfig, AppState};
use sentiscope_engine::LexiconEngine;

#[derive(Parser, Debug)]
#[command(name = "sentiscope-api")]
#[command(about = "SentiScope sentiment analysis API server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "sentiscope.yaml")]
    config: String,

    /// Listen address (overrides config)
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Listen port (overrides config)
    #[arg(short = 'P', long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    info!("Starting SentiScope API");

    let mut config = ApiConfig::load(&cli.config)?;
    if let Some(listen) = cli.listen {
        config.listen = listen;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    info!("Configuration loaded successfully");
    info!("Max batch size: {}", config.max_batch_size);

    let metrics_handle = init_metrics()?;

    let engine = Arc::new(LexiconEngine::new());
    let analyzer = Arc::new(SentimentAnalyzer::new(engine)?);
    info!("Analyzer ready (engine: {})", analyzer.engine().name());

    let addr: SocketAddr = format!("{}:{}", config.listen, config.port).parse()?;
    let state = AppState::new(analyzer, config, metrics_handle);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server...");
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("sentiscope=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentiscope=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "sentiscope_requests_total",
        "Total number of requests processed by endpoint"
    );
    metrics::describe_histogram!(
        "sentiscope_analysis_latency_us",
        metrics::Unit::Microseconds,
        "Analysis latency in microseconds"
    );
    metrics::describe_counter!("sentiscope_errors_total", "Total number of errors");

    info!("Metrics exporter initialized");
    Ok(handle)
}
