//! SentiScope REST API server
//!
//! Exposes the analysis pipeline over HTTP with JSON envelopes,
//! Prometheus metrics and a health endpoint.

pub mod config;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use routes::create_router;
pub use state::AppState;
