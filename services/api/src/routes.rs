use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use boundaryspace::compat::{
    compatibility_router, Baseline, Boundary, BoundaryAlignment, CompatibilityEngine,
    CompatibilityInsight, CompatibilityService, FlagAssessment, Interaction, NotificationSink,
    OverallCompatibility, RelationshipRepository, RelationshipStats,
};
use boundaryspace::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Payload for the stateless scoring endpoint: everything the engine needs
/// arrives in the request, nothing is read from or written to storage.
#[derive(Debug, Deserialize)]
pub(crate) struct CompatibilityReportRequest {
    pub(crate) relationship_name: String,
    pub(crate) baseline: Baseline,
    #[serde(default)]
    pub(crate) interactions: Vec<Interaction>,
    #[serde(default)]
    pub(crate) boundaries: Vec<Boundary>,
    #[serde(default)]
    pub(crate) stats: Option<RelationshipStats>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompatibilityReportResponse {
    pub(crate) relationship_name: String,
    pub(crate) sample_size: usize,
    pub(crate) insights: Vec<CompatibilityInsight>,
    pub(crate) overall: OverallCompatibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) alignment: Option<BoundaryAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) flag_assessment: Option<FlagAssessment>,
}

pub(crate) fn with_compatibility_routes<R, S>(
    service: Arc<CompatibilityService<R, S>>,
) -> axum::Router
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    compatibility_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/compatibility/report",
            axum::routing::post(compatibility_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn compatibility_report_endpoint(
    Json(payload): Json<CompatibilityReportRequest>,
) -> Result<Json<CompatibilityReportResponse>, AppError> {
    let CompatibilityReportRequest {
        relationship_name,
        baseline,
        interactions,
        boundaries,
        stats,
    } = payload;

    let engine = CompatibilityEngine::default();
    let report = engine.report(&relationship_name, &interactions, &baseline);
    let alignment = if boundaries.is_empty() {
        None
    } else {
        engine.score_boundary_alignment(&boundaries, Some(&baseline))
    };
    let flag_assessment = stats.map(|stats| engine.score_flag_ratio(&stats));

    Ok(Json(CompatibilityReportResponse {
        relationship_name: report.relationship_name,
        sample_size: report.sample_size,
        insights: report.insights,
        overall: report.overall,
        alignment,
        flag_assessment,
    }))
}
