//! Job listing integration tests

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::TestApp;

#[test_log::test(tokio::test)]
async fn test_get_jobs_projects_results() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "results": [
                {
                    "id": "job-1",
                    "title": "Backend Engineer",
                    "location": "Lisbon",
                    "status": "open",
                    "external_url": "https://careers.example.com/job-1",
                    "department": "Platform",
                },
                {"id": "job-2", "title": "Recruiter"},
                {},
            ]
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let (status, body) = app.get("/jobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "id": "job-1",
                "title": "Backend Engineer",
                "location": "Lisbon",
                "status": "open",
                "external_url": "https://careers.example.com/job-1",
            },
            {
                "id": "job-2",
                "title": "Recruiter",
                "location": null,
                "status": null,
                "external_url": null,
            },
            {
                "id": null,
                "title": null,
                "location": null,
                "status": null,
                "external_url": null,
            },
        ])
    );
}

#[tokio::test]
async fn test_get_jobs_without_results_is_empty_array() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&app.upstream)
        .await;

    let (status, body) = app.get("/jobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_jobs_passes_through_upstream_status() {
    for upstream_status in [401u16, 404, 429, 503] {
        let app = TestApp::new().await;

        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(
                ResponseTemplate::new(upstream_status)
                    .set_body_json(json!({"detail": "upstream detail is discarded"})),
            )
            .mount(&app.upstream)
            .await;

        let (status, body) = app.get("/jobs").await;

        assert_eq!(status.as_u16(), upstream_status);
        assert_eq!(body, json!({"error": "Failed to fetch jobs"}));
    }
}

#[tokio::test]
async fn test_get_jobs_malformed_upstream_body_is_500() {
    let app = TestApp::new().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&app.upstream)
        .await;

    let (status, body) = app.get("/jobs").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}
