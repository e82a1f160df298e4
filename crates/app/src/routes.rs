//! Route definitions for the ATS gateway

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{applications, candidates, jobs};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(jobs::get_jobs))
        .route("/candidates", post(candidates::create_candidate))
        .route("/applications", get(applications::get_applications))
}
