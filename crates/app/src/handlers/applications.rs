//! Application listing for a job

use std::collections::HashMap;

use ats_gateway_ats::{Application, Upstream};
use ats_gateway_common::{ApiResponse, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::state::AppState;

pub const MISSING_JOB_ID: &str = "Missing job_id";
pub const FETCH_APPLICATIONS_FAILED: &str = "Failed to fetch applications";

/// List applications for the `job_id` query parameter.
///
/// A missing or empty `job_id` is answered locally with 400; nothing is sent
/// upstream.
pub async fn get_applications(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<ApiResponse<Vec<Application>>> {
    let job_id = match params.get("job_id").filter(|id| !id.is_empty()) {
        Some(job_id) => job_id,
        None => return Ok(ApiResponse::error(StatusCode::BAD_REQUEST, MISSING_JOB_ID)),
    };

    match state.ats.list_applications(job_id).await? {
        Upstream::Accepted(applications) => Ok(ApiResponse::Ok(applications)),
        Upstream::Rejected(status) => Ok(ApiResponse::error(status, FETCH_APPLICATIONS_FAILED)),
    }
}
