//! Application state shared by the handlers

use ats_gateway_ats::AtsClient;
use ats_gateway_common::AtsConfig;

#[derive(Clone)]
pub struct AppState {
    pub ats: AtsClient,
}

impl AppState {
    pub fn new(config: &AtsConfig) -> Self {
        tracing::info!(
            base_url = %config.base_url,
            authenticated = config.has_api_key(),
            "Configured ATS upstream"
        );

        Self {
            ats: AtsClient::new(config),
        }
    }
}
