//! Integration tests for the HTTP API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, against the in-memory roster backend.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use rollcall_server::router::build_router;
use rollcall_server::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_router() -> Router {
    build_router(Arc::new(AppState::in_memory()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn add_student(router: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::post("/add_student")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get(router: &Router, path: &str) -> (StatusCode, Value) {
    send(router, Request::get(path).body(Body::empty()).unwrap()).await
}

async fn post_empty(router: &Router, path: &str) -> (StatusCode, Value) {
    send(router, Request::post(path).body(Body::empty()).unwrap()).await
}

fn unselected_count(students: &Value) -> usize {
    students
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["is_selected"] == json!(false))
        .count()
}

// =========================================================================
// Pages
// =========================================================================

#[tokio::test]
async fn test_index_and_admin_return_html() {
    let router = make_router();

    for path in ["/", "/admin"] {
        let response = router
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.contains("text/html"));
    }
}

// =========================================================================
// Registration
// =========================================================================

#[tokio::test]
async fn test_register_succeeds_once() {
    let router = make_router();

    let (status, body) = add_student(&router, json!({ "name": "Alice" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Registered successfully" }));

    let (status, body) = add_student(&router, json!({ "name": "Alice" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name already registered" }));
}

#[tokio::test]
async fn test_register_trims_before_uniqueness_check() {
    let router = make_router();

    add_student(&router, json!({ "name": "  Bob " })).await;
    let (status, _) = add_student(&router, json!({ "name": "Bob" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, students) = get(&router, "/students").await;
    assert_eq!(students, json!([{ "name": "Bob", "is_selected": false }]));
}

#[tokio::test]
async fn test_register_rejects_empty_and_missing_names() {
    let router = make_router();

    for body in [json!({ "name": "" }), json!({ "name": "   " }), json!({})] {
        let (status, response) = add_student(&router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({ "error": "Name is required" }));
    }

    let (_, students) = get(&router, "/students").await;
    assert_eq!(students, json!([]));
}

#[tokio::test]
async fn test_register_rejects_malformed_body() {
    let router = make_router();

    let request = Request::post("/add_student")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// =========================================================================
// Picking
// =========================================================================

#[tokio::test]
async fn test_pick_alice_and_bob_then_exhausted() {
    let router = make_router();
    add_student(&router, json!({ "name": "Alice" })).await;
    add_student(&router, json!({ "name": "Bob" })).await;

    let (status, first) = get(&router, "/pick_student").await;
    assert_eq!(status, StatusCode::OK);
    let first = first["selected"].as_str().unwrap().to_owned();
    assert!(first == "Alice" || first == "Bob");

    let (_, second) = get(&router, "/pick_student").await;
    let second = second["selected"].as_str().unwrap().to_owned();
    let expected_other = if first == "Alice" { "Bob" } else { "Alice" };
    assert_eq!(second, expected_other);

    let (status, third) = get(&router, "/pick_student").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(third, json!({ "message": "All students already selected" }));
}

#[tokio::test]
async fn test_pick_flips_exactly_one_flag_and_logs_once() {
    let router = make_router();
    for name in ["Alice", "Bob", "Carol"] {
        add_student(&router, json!({ "name": name })).await;
    }

    let (_, picked) = get(&router, "/pick_student").await;
    let picked = picked["selected"].clone();

    let (_, students) = get(&router, "/students").await;
    assert_eq!(unselected_count(&students), 2);
    let flagged: Vec<&Value> = students
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["is_selected"] == json!(true))
        .collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0]["name"], picked);

    let (_, report) = get(&router, "/report").await;
    assert_eq!(report.as_array().unwrap().len(), 1);
    assert_eq!(report[0]["name"], picked);
}

#[tokio::test]
async fn test_pick_on_empty_roster_is_exhausted() {
    let router = make_router();

    let (status, body) = get(&router, "/pick_student").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "All students already selected" }));

    let (_, report) = get(&router, "/report").await;
    assert_eq!(report, json!([]));
}

#[tokio::test]
async fn test_exhausted_pick_mutates_nothing() {
    let router = make_router();
    add_student(&router, json!({ "name": "Alice" })).await;
    get(&router, "/pick_student").await;

    let (_, students_before) = get(&router, "/students").await;
    let (_, report_before) = get(&router, "/report").await;

    get(&router, "/pick_student").await;

    let (_, students_after) = get(&router, "/students").await;
    let (_, report_after) = get(&router, "/report").await;
    assert_eq!(students_before, students_after);
    assert_eq!(report_before, report_after);
}

// =========================================================================
// Listing / reporting
// =========================================================================

#[tokio::test]
async fn test_students_ordered_by_name() {
    let router = make_router();
    for name in ["Carol", "Alice", "Bob"] {
        add_student(&router, json!({ "name": name })).await;
    }

    let (status, students) = get(&router, "/students").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = students
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn test_report_matches_pick_order() {
    let router = make_router();
    for name in ["A", "B", "C", "D"] {
        add_student(&router, json!({ "name": name })).await;
    }

    let mut picked = Vec::new();
    for _ in 0..4 {
        let (_, body) = get(&router, "/pick_student").await;
        picked.push(body["selected"].as_str().unwrap().to_owned());
    }

    let (status, report) = get(&router, "/report").await;
    assert_eq!(status, StatusCode::OK);
    let entries = report.as_array().unwrap();
    let logged: Vec<&str> = entries.iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert_eq!(logged, picked);

    // "YYYY-MM-DD HH:MM:SS" sorts lexicographically in time order.
    let times: Vec<&str> = entries.iter().map(|e| e["time"].as_str().unwrap()).collect();
    assert!(times.iter().all(|t| t.len() == 19));
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
}

// =========================================================================
// Reset
// =========================================================================

#[tokio::test]
async fn test_reset_starts_a_fresh_session() {
    let router = make_router();
    add_student(&router, json!({ "name": "Alice" })).await;
    add_student(&router, json!({ "name": "Bob" })).await;
    get(&router, "/pick_student").await;
    get(&router, "/pick_student").await;

    let (status, body) = post_empty(&router, "/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Session reset successfully" }));

    let (_, students) = get(&router, "/students").await;
    assert_eq!(students.as_array().unwrap().len(), 2);
    assert_eq!(unselected_count(&students), 2);

    let (_, report) = get(&router, "/report").await;
    assert_eq!(report, json!([]));

    let (_, first) = get(&router, "/pick_student").await;
    let (_, second) = get(&router, "/pick_student").await;
    assert!(first["selected"].is_string());
    assert!(second["selected"].is_string());
    assert_ne!(first["selected"], second["selected"]);
    let (_, third) = get(&router, "/pick_student").await;
    assert_eq!(third, json!({ "message": "All students already selected" }));
}

#[tokio::test]
async fn test_reset_keeps_registrations_unique() {
    let router = make_router();
    add_student(&router, json!({ "name": "Alice" })).await;
    post_empty(&router, "/reset").await;

    let (status, _) = add_student(&router, json!({ "name": "Alice" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =========================================================================
// Routing / health
// =========================================================================

#[tokio::test]
async fn test_health_reports_memory_backend() {
    let router = make_router();

    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let router = make_router();

    let response = router
        .oneshot(Request::get("/reset").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
