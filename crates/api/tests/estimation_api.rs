//! HTTP-level integration tests for the order configurator endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};

// ---------------------------------------------------------------------------
// POST /estimates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn estimate_default_cabinet() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app,
        "/api/v1/estimates",
        serde_json::json!({
            "components": [{"kind": "simple_cabinet"}],
            "delivery": "assembled",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    // Default cabinet: 2.0 x 0.8 x 0.6 m.
    assert_eq!(data["total_volume_m3"], 0.96);
    assert_eq!(data["needed_height_m"], 2.0);
    assert_eq!(data["vehicle"], "Autoutilitară mică (≈3 m³)");
    assert!(data["section_days"]["CNC"].as_u64().unwrap() >= 1);
    assert!(data["section_days"]["Ambalare"].as_u64().unwrap() >= 1);
    assert!(data["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn estimate_empty_order_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app,
        "/api/v1/estimates",
        serde_json::json!({"components": [], "delivery": "disassembled"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_volume_m3"], 0.0);
    assert!(json["data"]["section_days"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn estimate_surfaces_material_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app,
        "/api/v1/estimates",
        serde_json::json!({
            "components": [{"kind": "painted_front", "paint_percent": 80, "veneer_percent": 40}],
            "delivery": "assembled",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["warnings"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// POST /estimates/schedule
// ---------------------------------------------------------------------------

#[tokio::test]
async fn schedule_lays_sections_out_sequentially() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app,
        "/api/v1/estimates/schedule",
        serde_json::json!({
            "components": [{"kind": "simple_cabinet", "units": 2}],
            "delivery": "assembled",
            "sections": ["CNC", "Montaj"],
            "start": "2024-01-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let schedule = &json["data"]["schedule"];

    let deadlines = schedule["deadlines"].as_array().unwrap();
    assert_eq!(deadlines.len(), 2);
    assert_eq!(deadlines[0]["section"], "CNC");
    assert!(schedule["overall_end"].is_string());
}

#[tokio::test]
async fn schedule_rejects_unknown_sections() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(dir.path());

    let response = post_json(
        app,
        "/api/v1/estimates/schedule",
        serde_json::json!({
            "components": [],
            "delivery": "assembled",
            "sections": ["CNC", "Garaj"],
            "start": "2024-01-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_SECTION");
}
