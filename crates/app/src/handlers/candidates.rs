//! Candidate creation
//!
//! Two upstream writes: create the candidate, then create an application for
//! the requested job. A failed second step leaves the candidate in place.

use ats_gateway_ats::{CandidateSubmission, Upstream};
use ats_gateway_common::{ApiResponse, Message, Result};
use axum::{body::Bytes, extract::State};

use crate::state::AppState;

pub const CANDIDATE_CREATION_FAILED: &str = "Candidate creation failed";
pub const ATTACH_FAILED: &str = "Failed to attach candidate to job";
pub const CANDIDATE_CREATED: &str = "Candidate created and attached";

pub async fn create_candidate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiResponse<Message>> {
    let submission = CandidateSubmission::from_body(&body)?;

    let candidate_id = match state.ats.create_candidate(&submission.to_candidate()).await? {
        Upstream::Accepted(id) => id,
        Upstream::Rejected(status) => {
            return Ok(ApiResponse::error(status, CANDIDATE_CREATION_FAILED))
        }
    };

    tracing::info!(candidate_id = %candidate_id, "Candidate created in ATS");

    // The application payload carries job_id only.
    match state
        .ats
        .create_application(&submission.to_application())
        .await?
    {
        Upstream::Accepted(()) => Ok(ApiResponse::Created(Message::new(CANDIDATE_CREATED))),
        Upstream::Rejected(status) => {
            tracing::warn!(
                candidate_id = %candidate_id,
                status = status.as_u16(),
                "Candidate created but not attached to job"
            );
            Ok(ApiResponse::error(status, ATTACH_FAILED))
        }
    }
}
