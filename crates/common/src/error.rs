//! Fault type for the ATS gateway
//!
//! Upstream rejections are not errors: they are ordinary responses built with
//! [`crate::ApiResponse`]. `Error` covers what is left over (transport failures,
//! undecodable bodies, bad configuration) and turns it into a generic 5xx.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream request error: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Upstream(_) => StatusCode::BAD_GATEWAY,
            Error::Configuration(_) | Error::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to callers. Details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::Upstream(_) => "Upstream request failed",
            Error::Configuration(_) | Error::Serialization(_) => "Internal server error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(error = %self, status = status.as_u16(), "Request failed");

        let body = Json(json!({ "error": self.public_message() }));

        (status, body).into_response()
    }
}
