//! Upstream authentication integration tests
//!
//! Every outbound call carries `Authorization: Bearer <key>` when a key is
//! configured, and no `Authorization` header otherwise.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestApp, TEST_API_KEY};

/// Exercise every upstream call: jobs, candidates, applications (write and read)
async fn call_every_endpoint(app: &TestApp) {
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&app.upstream)
        .await;
    Mock::given(method("POST"))
        .and(path("/candidates"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .mount(&app.upstream)
        .await;
    Mock::given(method("POST"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&app.upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&app.upstream)
        .await;

    app.get("/jobs").await;
    app.post_json("/candidates", json!({"name": "Ada", "job_id": 1}))
        .await;
    app.get("/applications?job_id=1").await;
}

#[tokio::test]
async fn test_bearer_header_on_every_call() {
    let app = TestApp::new().await;

    call_every_endpoint(&app).await;

    let received = app.upstream.received_requests().await.unwrap();
    assert_eq!(received.len(), 4);
    let expected = format!("Bearer {}", TEST_API_KEY);
    for request in &received {
        assert_eq!(
            request.headers.get("authorization").unwrap().to_str().unwrap(),
            expected,
            "{} {}",
            request.method,
            request.url
        );
    }
}

#[tokio::test]
async fn test_no_auth_header_for_blank_key() {
    for key in ["", "   ", "\t"] {
        let app = TestApp::with_api_key(key).await;

        call_every_endpoint(&app).await;

        let received = app.upstream.received_requests().await.unwrap();
        assert_eq!(received.len(), 4);
        assert!(received
            .iter()
            .all(|r| !r.headers.contains_key("authorization")));
    }
}
