//! ATS Gateway - AWS Lambda Runtime
//!
//! Entry point for deploying the gateway as an AWS Lambda function behind API Gateway.
//! Uses lambda_http to integrate the Axum router with the Lambda runtime.

use lambda_http::{run, Error};
use tower_http::trace::TraceLayer;
use tracing::info;

use ats_gateway_app::create_app;
use ats_gateway_common::AtsConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .without_time() // Lambda adds timestamps
        .init();

    info!("Initializing ATS gateway Lambda");

    // Resolved once per execution environment, shared by every invocation
    let config = AtsConfig::from_env().map_err(|e| Error::from(format!("Config error: {}", e)))?;

    let app = create_app(&config).layer(TraceLayer::new_for_http());

    info!("ATS gateway Lambda ready to serve requests");

    run(app).await
}
