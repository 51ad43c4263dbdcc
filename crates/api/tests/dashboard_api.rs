//! HTTP-level integration tests for the dashboard widgets.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};

fn create_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "value": 10000.0,
        "sections": ["CNC", "Montaj"],
        "start": "2024-01-01",
        "section_days": {"CNC": 2, "Montaj": 3},
    })
}

#[tokio::test]
async fn summary_on_empty_store_is_all_zero() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = get(app, "/api/v1/dashboard/summary").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["active_projects"], 0);
    assert_eq!(json["data"]["finished_projects"], 0);
    assert_eq!(json["data"]["total_value_active"], 0.0);
    assert_eq!(json["data"]["average_progress"], 0.0);
}

#[tokio::test]
async fn summary_counts_active_projects_and_value() {
    let dir = tempfile::tempdir().unwrap();

    let app = common::build_test_app(dir.path());
    post_json(app, "/api/v1/projects", create_body("Unu")).await;
    let app = common::build_test_app(dir.path());
    post_json(app, "/api/v1/projects", create_body("Doi")).await;

    let app = common::build_test_app(dir.path());
    let response = get(app, "/api/v1/dashboard/summary").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["active_projects"], 2);
    assert_eq!(json["data"]["total_value_active"], 20000.0);
}

#[tokio::test]
async fn risk_report_flags_overdue_projects() {
    let dir = tempfile::tempdir().unwrap();

    // Planned end in January 2024, far in the past relative to "today".
    let app = common::build_test_app(dir.path());
    post_json(app, "/api/v1/projects", create_body("Întârziat")).await;

    let app = common::build_test_app(dir.path());
    let response = get(app, "/api/v1/dashboard/risk").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["critical"], 1);
    let projects = json["data"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["bucket"], "critical");
    assert_eq!(projects[0]["label"], "Critic (>3 zile)");
    assert!(projects[0]["days_late"].as_i64().unwrap() > 3);
}

#[tokio::test]
async fn forecast_lists_upcoming_deliveries() {
    let dir = tempfile::tempdir().unwrap();

    let app = common::build_test_app(dir.path());
    post_json(app, "/api/v1/projects", create_body("Unu")).await;

    let app = common::build_test_app(dir.path());
    let response = get(app, "/api/v1/dashboard/forecast").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["suggested_start"].is_string());
    let upcoming = json["data"]["upcoming"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["end"], "2024-01-06");
}

#[tokio::test]
async fn activity_feed_collects_updates_across_projects() {
    let dir = tempfile::tempdir().unwrap();

    let app = common::build_test_app(dir.path());
    post_json(app, "/api/v1/projects", create_body("Unu")).await;

    let app = common::build_test_app(dir.path());
    put_json(
        app,
        "/api/v1/projects/P-2024-001/sections/CNC/progress",
        serde_json::json!({"percent": 30, "user": "Ana"}),
    )
    .await;

    let app = common::build_test_app(dir.path());
    let response = get(app, "/api/v1/dashboard/activity").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["project_id"], "P-2024-001");
    assert_eq!(items[0]["user"], "Ana");
}
