//! Job listing

use ats_gateway_ats::{Job, Upstream};
use ats_gateway_common::{ApiResponse, Result};
use axum::extract::State;

use crate::state::AppState;

pub const FETCH_JOBS_FAILED: &str = "Failed to fetch jobs";

/// List jobs from the ATS, projected to id, title, location, status and external_url
pub async fn get_jobs(State(state): State<AppState>) -> Result<ApiResponse<Vec<Job>>> {
    match state.ats.list_jobs().await? {
        Upstream::Accepted(jobs) => Ok(ApiResponse::Ok(jobs)),
        Upstream::Rejected(status) => Ok(ApiResponse::error(status, FETCH_JOBS_FAILED)),
    }
}
