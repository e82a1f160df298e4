//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables once at process
//! start and handed to the application by value. Nothing reads the
//! environment after startup.

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use std::env;

use crate::error::{Error, Result};

/// Upstream ATS connection settings
#[derive(Clone)]
pub struct AtsConfig {
    /// Base URL of the ATS API, without trailing path (e.g. `https://ats.example.com/v1`)
    pub base_url: String,

    /// API key as configured. Blank means no authentication.
    api_key: String,

    /// Precomputed `Bearer` header, present only for a non-blank key
    bearer: Option<HeaderValue>,
}

impl std::fmt::Debug for AtsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.bearer.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AtsConfig {
    /// Build a configuration from explicit values.
    ///
    /// Fails only when a non-blank key cannot be carried in an HTTP header.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let bearer = if api_key.trim().is_empty() {
            None
        } else {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
                Error::Configuration(
                    "ATS_API_KEY contains characters not allowed in an HTTP header".to_string(),
                )
            })?;
            value.set_sensitive(true);
            Some(value)
        };

        Ok(Self {
            base_url: base_url.into(),
            api_key,
            bearer,
        })
    }

    /// Load upstream settings from `ATS_BASE_URL` and `ATS_API_KEY`.
    ///
    /// Both default to empty. An empty base URL is not rejected here.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let base_url = env::var("ATS_BASE_URL").unwrap_or_default();
        let api_key = env::var("ATS_API_KEY").unwrap_or_default();

        if base_url.is_empty() {
            tracing::warn!("ATS_BASE_URL is not set; upstream requests will fail");
        }

        Self::new(base_url, api_key)
    }

    /// Whether upstream calls carry an `Authorization` header
    pub fn has_api_key(&self) -> bool {
        self.bearer.is_some()
    }

    /// The configured key, untrimmed
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Headers attached to every upstream call.
    ///
    /// Contains `Authorization: Bearer <key>` when the key is non-blank,
    /// otherwise nothing.
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(bearer) = &self.bearer {
            headers.insert(AUTHORIZATION, bearer.clone());
        }
        headers
    }
}

/// Process settings for the local development server
#[derive(Debug, Clone)]
pub struct Config {
    pub ats: AtsConfig,

    /// Port the local server binds to
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let ats = AtsConfig::from_env()?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        Ok(Self { ats, port })
    }
}
