use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::common::*;
use crate::compat::router::compatibility_router;

fn router() -> axum::Router {
    let (service, _, _) = build_service();
    compatibility_router(Arc::new(service))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request built")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request built")
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn baseline_payload() -> Value {
    json!({
        "communication_style": "direct",
        "conflict_resolution": "discuss_immediately",
        "personal_space_needs": "high",
        "emotional_support_level": "medium",
        "non_negotiable_boundaries": ["poor communication"],
        "flexible_boundaries": [],
        "triggers": ["being interrupted"],
        "recorded_at": "2025-06-01T09:00:00Z"
    })
}

#[tokio::test]
async fn baseline_endpoint_round_trips() {
    let app = router();

    let created = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/baseline", baseline_payload()))
        .await
        .expect("response");
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = read_json_body(created).await;
    assert_eq!(body["version"], 1);

    let fetched = app
        .oneshot(get_request("/api/v1/baseline"))
        .await
        .expect("response");
    assert_eq!(fetched.status(), StatusCode::OK);
    let body = read_json_body(fetched).await;
    assert_eq!(body["communication_style"], "direct");
}

#[tokio::test]
async fn missing_baseline_is_a_call_to_action_not_an_error() {
    let app = router();

    let response = app
        .oneshot(get_request("/api/v1/baseline"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "baseline_required");
}

#[tokio::test]
async fn report_for_unknown_relationship_is_not_found() {
    let app = router();

    let response = app
        .oneshot(get_request("/api/v1/relationships/rel-nope/report"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_flow_produces_a_ready_report() {
    let app = router();

    let created = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/baseline", baseline_payload()))
        .await
        .expect("response");
    assert_eq!(created.status(), StatusCode::CREATED);

    let relationship = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/relationships",
            json!({ "name": "Alex", "kind": "romantic" }),
        ))
        .await
        .expect("response");
    assert_eq!(relationship.status(), StatusCode::CREATED);
    let relationship = read_json_body(relationship).await;
    let id = relationship["relationship"]["id"]
        .as_str()
        .expect("relationship id")
        .to_string();

    let logged = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/relationships/{id}/interactions"),
            json!({
                "logged_at": "2025-06-02T18:00:00Z",
                "communication_style_respected": true,
                "boundaries_respected": true,
                "triggers_avoided": true,
                "energy_before": 5,
                "energy_after": 8,
                "self_worth_before": 5,
                "self_worth_after": 7
            }),
        ))
        .await
        .expect("response");
    assert_eq!(logged.status(), StatusCode::ACCEPTED);

    let report = app
        .oneshot(get_request(&format!("/api/v1/relationships/{id}/report")))
        .await
        .expect("response");
    assert_eq!(report.status(), StatusCode::OK);
    let body = read_json_body(report).await;

    assert_eq!(body["availability"], "ready");
    assert_eq!(body["insights"].as_array().expect("insights").len(), 5);
    assert_eq!(body["overall"]["score"], 90.0);
    assert_eq!(body["overall"]["band_label"], "Highly Compatible");
}

#[tokio::test]
async fn alignment_endpoint_returns_null_without_data() {
    let app = router();

    let response = app
        .oneshot(get_request("/api/v1/alignment"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body.is_null());
}

#[tokio::test]
async fn notifications_endpoint_caps_at_two_cards() {
    let app = router();

    app.clone()
        .oneshot(json_request("POST", "/api/v1/baseline", baseline_payload()))
        .await
        .expect("response");

    let relationship = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/relationships",
            json!({ "name": "Manager", "kind": "workplace" }),
        ))
        .await
        .expect("response");
    let relationship = read_json_body(relationship).await;
    let id = relationship["relationship"]["id"]
        .as_str()
        .expect("relationship id")
        .to_string();

    for day in [3, 4] {
        let logged = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/v1/relationships/{id}/interactions"),
                json!({
                    "logged_at": format!("2025-06-{day:02}T18:00:00Z"),
                    "communication_style_respected": false,
                    "boundaries_respected": false,
                    "triggers_avoided": false,
                    "energy_before": 7,
                    "energy_after": 3,
                    "deal_breakers_crossed": ["dishonesty"]
                }),
            ))
            .await
            .expect("response");
        assert_eq!(logged.status(), StatusCode::ACCEPTED);
    }

    let response = app
        .oneshot(get_request(
            "/api/v1/notifications?today=2025-06-05T09:00:00Z",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let cards = body.as_array().expect("cards");

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["title"], "Deal-Breaker Alert");
    assert_eq!(cards[1]["title"], "Workplace Energy Alert");
}
