//! ATS HTTP Client Implementation
//!
//! Issues the four upstream calls. A status outside the call's accepted set is
//! reported as [`Upstream::Rejected`] and the body is dropped; transport and
//! decoding failures are returned as errors.

use ats_gateway_common::{AtsConfig, Result};
use reqwest::{header::HeaderMap, Response, StatusCode};
use serde_json::Value;

use crate::records::{Application, Job, NewApplication, NewCandidate, PartialRecord};

/// Outcome of an upstream call that completed at the HTTP level
#[derive(Debug, Clone, PartialEq)]
pub enum Upstream<T> {
    Accepted(T),
    Rejected(StatusCode),
}

/// HTTP client for the ATS API.
///
/// No timeout and no retry are configured.
#[derive(Debug, Clone)]
pub struct AtsClient {
    http: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl AtsClient {
    pub fn new(config: &AtsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            headers: config.auth_headers(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET <base>/jobs`
    pub async fn list_jobs(&self) -> Result<Upstream<Vec<Job>>> {
        let response = self
            .http
            .get(format!("{}/jobs", self.base_url))
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "ATS rejected job listing");
            return Ok(Upstream::Rejected(status));
        }

        let jobs: Vec<Job> = read_results(response).await?.iter().map(Job::project).collect();
        tracing::debug!(count = jobs.len(), "Fetched jobs from ATS");
        Ok(Upstream::Accepted(jobs))
    }

    /// `POST <base>/candidates`, yielding the created candidate's `id`
    pub async fn create_candidate(&self, candidate: &NewCandidate) -> Result<Upstream<Value>> {
        let response = self
            .http
            .post(format!("{}/candidates", self.base_url))
            .headers(self.headers.clone())
            .json(candidate)
            .send()
            .await?;

        let status = response.status();
        if !is_write_accepted(status) {
            tracing::warn!(status = status.as_u16(), "ATS rejected candidate creation");
            return Ok(Upstream::Rejected(status));
        }

        let created: PartialRecord = serde_json::from_slice(&response.bytes().await?)?;
        tracing::debug!(status = status.as_u16(), "Candidate accepted by ATS");
        Ok(Upstream::Accepted(created.field("id")))
    }

    /// `POST <base>/applications`
    pub async fn create_application(&self, application: &NewApplication) -> Result<Upstream<()>> {
        let response = self
            .http
            .post(format!("{}/applications", self.base_url))
            .headers(self.headers.clone())
            .json(application)
            .send()
            .await?;

        let status = response.status();
        if !is_write_accepted(status) {
            tracing::warn!(status = status.as_u16(), "ATS rejected application creation");
            return Ok(Upstream::Rejected(status));
        }

        tracing::debug!(status = status.as_u16(), "Application accepted by ATS");
        Ok(Upstream::Accepted(()))
    }

    /// `GET <base>/applications?job_id=<job_id>`
    ///
    /// `job_id` is interpolated as-is; callers supply an already URL-safe value.
    pub async fn list_applications(&self, job_id: &str) -> Result<Upstream<Vec<Application>>> {
        let response = self
            .http
            .get(format!("{}/applications?job_id={}", self.base_url, job_id))
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), job_id, "ATS rejected application listing");
            return Ok(Upstream::Rejected(status));
        }

        let applications: Vec<Application> = read_results(response)
            .await?
            .iter()
            .map(Application::project)
            .collect();
        tracing::debug!(count = applications.len(), job_id, "Fetched applications from ATS");
        Ok(Upstream::Accepted(applications))
    }
}

fn is_write_accepted(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

/// Decode a `{"results": [...]}` body
async fn read_results(response: Response) -> Result<Vec<PartialRecord>> {
    let page: PartialRecord = serde_json::from_slice(&response.bytes().await?)?;
    Ok(page.records("results")?)
}
