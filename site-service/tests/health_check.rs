mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use common::TestApp;

#[tokio::test]
async fn health_check_reports_ok_when_store_reachable() {
    let app = TestApp::spawn();

    let (status, body) = app.get("/health-check").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_check_reports_failure_detail_when_store_down() {
    let app = TestApp::spawn();
    app.store.fail_reads(true);

    let (status, body) = app.get("/health-check").await;

    assert!(status.is_server_error());
    assert_eq!(body["status"], "unhealthy");
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn liveness_ignores_store_state() {
    let app = TestApp::spawn();
    app.store.fail_reads(true);

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "site-service");
}

#[tokio::test]
async fn readiness_follows_store_state() {
    let app = TestApp::spawn();
    let (status, _) = app.get("/ready").await;
    assert_eq!(status, StatusCode::OK);

    app.store.fail_reads(true);
    let (status, _) = app.get("/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn request_id_is_generated_or_propagated() {
    let app = TestApp::spawn();

    let response = app
        .send(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await;
    assert!(response.headers().contains_key("x-request-id"));

    let response = app
        .send(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let app = TestApp::spawn();

    let response = app
        .send(
            Request::builder()
                .method("OPTIONS")
                .uri("/contact")
                .header("Origin", "https://benefits.example")
                .header("Access-Control-Request-Method", "POST")
                .header("Access-Control-Request-Headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
