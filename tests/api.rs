//! Router-level endpoint tests

use std::{sync::Arc, time::Duration};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use green_wave::{create_router, AppState};

fn app_state() -> Arc<AppState> {
    Arc::new(AppState::new(8642, "127.0.0.1".to_string()))
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = create_router(app_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], "0.2.0");
}

#[tokio::test]
async fn status_reports_the_running_fixed_simulation() {
    let state = app_state();
    state.scheduler.initialize();
    // Let the run task render its first phase.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let app = create_router(Arc::clone(&state));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["mode"], "fixed");
    assert_eq!(body["running"], true);
    assert_eq!(body["panel"]["light"], "red");
    assert_eq!(body["panel"]["system_type"]["text"], "Fixed Schedule");
    assert_eq!(body["port"], 8642);
}

#[tokio::test]
async fn toggle_switches_the_simulation_mode() {
    let state = app_state();
    state.scheduler.initialize();

    let response = create_router(Arc::clone(&state))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/toggle")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "switched");
    assert_eq!(body["mode"], "adaptive");
    assert_eq!(body["panel"]["system_type"]["text"], "AI Adaptive");

    let response = create_router(Arc::clone(&state))
        .oneshot(
            Request::builder()
                .uri("/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = response_json(response).await;
    assert_eq!(body["mode"], "adaptive");
    assert_eq!(body["last_action"], "toggle -> adaptive");
}
