//! Response variant returned by every entry point
//!
//! A handler either succeeds with a payload or fails with a status and a
//! fixed message. The body is always JSON: the payload itself, or
//! `{"error": <message>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// 200 with the payload as body
    Ok(T),
    /// 201 with the payload as body
    Created(T),
    /// Any status with `{"error": message}` as body
    Error {
        status: StatusCode,
        message: &'static str,
    },
}

impl<T> ApiResponse<T> {
    pub fn error(status: StatusCode, message: &'static str) -> Self {
        Self::Error { status, message }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Ok(_) => StatusCode::OK,
            Self::Created(_) => StatusCode::CREATED,
            Self::Error { status, .. } => *status,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
            Self::Created(payload) => (StatusCode::CREATED, Json(payload)).into_response(),
            Self::Error { status, message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

/// `{"message": ...}` body for write endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
