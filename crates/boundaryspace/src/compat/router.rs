use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Boundary, FlagPolarity, Interaction, RelationshipId, RelationshipKind};
use super::repository::{NotificationSink, RelationshipRepository, RepositoryError};
use super::service::{BaselineDraft, CompatibilityService, ServiceError};

/// Router builder exposing the compatibility service as JSON endpoints.
pub fn compatibility_router<R, S>(service: Arc<CompatibilityService<R, S>>) -> Router
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    Router::new()
        .route(
            "/api/v1/baseline",
            get(baseline_handler::<R, S>).post(set_baseline_handler::<R, S>),
        )
        .route(
            "/api/v1/relationships",
            get(overview_handler::<R, S>).post(add_relationship_handler::<R, S>),
        )
        .route(
            "/api/v1/relationships/:relationship_id/interactions",
            post(log_interaction_handler::<R, S>),
        )
        .route(
            "/api/v1/relationships/:relationship_id/flags",
            post(record_flag_handler::<R, S>),
        )
        .route(
            "/api/v1/relationships/:relationship_id/check-ins",
            post(record_check_in_handler::<R, S>),
        )
        .route(
            "/api/v1/relationships/:relationship_id/report",
            get(report_handler::<R, S>),
        )
        .route(
            "/api/v1/boundaries",
            post(add_boundary_handler::<R, S>),
        )
        .route("/api/v1/alignment", get(alignment_handler::<R, S>))
        .route(
            "/api/v1/notifications",
            get(notifications_handler::<R, S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewRelationshipRequest {
    pub(crate) name: String,
    pub(crate) kind: RelationshipKind,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlagRequest {
    pub(crate) polarity: FlagPolarity,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckInRequest {
    pub(crate) safety_rating: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotificationsQuery {
    #[serde(default)]
    pub(crate) today: Option<DateTime<Utc>>,
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn set_baseline_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
    axum::Json(draft): axum::Json<BaselineDraft>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    match service.set_baseline(draft) {
        Ok(baseline) => (StatusCode::CREATED, axum::Json(baseline)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn baseline_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    match service.current_baseline() {
        Ok(Some(baseline)) => (StatusCode::OK, axum::Json(baseline)).into_response(),
        // A missing baseline is a call-to-action state, not a failure.
        Ok(None) => {
            let payload = json!({ "status": "baseline_required" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_relationship_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
    axum::Json(request): axum::Json<NewRelationshipRequest>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    match service.add_relationship(request.name, request.kind) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn overview_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    match service.overview() {
        Ok(rows) => (StatusCode::OK, axum::Json(rows)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn log_interaction_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
    Path(relationship_id): Path<String>,
    axum::Json(interaction): axum::Json<Interaction>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    let id = RelationshipId(relationship_id);
    match service.log_interaction(&id, interaction) {
        Ok(cards) => {
            let payload = json!({ "notifications": cards });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_flag_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
    Path(relationship_id): Path<String>,
    axum::Json(request): axum::Json<FlagRequest>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    let id = RelationshipId(relationship_id);
    match service.record_flag(&id, request.polarity) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_check_in_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
    Path(relationship_id): Path<String>,
    axum::Json(request): axum::Json<CheckInRequest>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    let id = RelationshipId(relationship_id);
    match service.record_check_in(&id, request.safety_rating) {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
    Path(relationship_id): Path<String>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    let id = RelationshipId(relationship_id);
    match service.report(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_boundary_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
    axum::Json(boundary): axum::Json<Boundary>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    match service.add_boundary(boundary) {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn alignment_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    match service.boundary_alignment() {
        // `null` body when there is not enough data to compute alignment.
        Ok(alignment) => (StatusCode::OK, axum::Json(alignment)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn notifications_handler<R, S>(
    State(service): State<Arc<CompatibilityService<R, S>>>,
    axum::extract::Query(query): axum::extract::Query<NotificationsQuery>,
) -> Response
where
    R: RelationshipRepository + 'static,
    S: NotificationSink + 'static,
{
    let today = query.today.unwrap_or_else(Utc::now);
    match service.notifications(today) {
        Ok(cards) => (StatusCode::OK, axum::Json(cards)).into_response(),
        Err(error) => error_response(error),
    }
}
