//! ATS gateway composition root
//!
//! Builds the router exposing the three entry points over one upstream client.

pub mod handlers;
pub mod routes;
pub mod state;

use ats_gateway_common::AtsConfig;
use axum::{routing::get, Router};

pub use state::AppState;

/// Create the application router. The configuration is resolved once by the
/// caller and not read again.
pub fn create_app(config: &AtsConfig) -> Router {
    let state = AppState::new(config);

    Router::new()
        .route("/health", get(health_check))
        .merge(routes::routes().with_state(state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
