use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AnswerSheet, AssessmentId, SubjectId};
use super::repository::{AssessmentRepository, EntitlementChecker, RepositoryError};
use super::service::{AssessmentService, ServiceError};

/// Router builder exposing the assessment endpoints.
///
/// Identity arrives as an explicit subject id: session and auth plumbing are
/// the host application's concern, not the engine's.
pub fn assessment_router<R, E>(service: Arc<AssessmentService<R, E>>) -> Router
where
    R: AssessmentRepository + 'static,
    E: EntitlementChecker + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_stage1_handler::<R, E>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(result_handler::<R, E>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/stage2",
            post(submit_stage2_handler::<R, E>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitRequest {
    pub(crate) subject_id: String,
    pub(crate) answers: BTreeMap<String, u8>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultQuery {
    pub(crate) subject_id: String,
}

fn parse_sheet(raw: BTreeMap<String, u8>) -> Result<AnswerSheet, Response> {
    AnswerSheet::from_values(raw).map_err(|err| {
        let payload = json!({ "error": err.to_string() });
        (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
    })
}

pub(crate) async fn submit_stage1_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
    E: EntitlementChecker + 'static,
{
    let answers = match parse_sheet(request.answers) {
        Ok(sheet) => sheet,
        Err(response) => return response,
    };

    match service.submit_stage1(SubjectId(request.subject_id), answers) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn result_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    Path(assessment_id): Path<String>,
    Query(query): Query<ResultQuery>,
) -> Response
where
    R: AssessmentRepository + 'static,
    E: EntitlementChecker + 'static,
{
    let id = AssessmentId(assessment_id);
    let subject = SubjectId(query.subject_id);

    match service.result(&subject, &id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submit_stage2_handler<R, E>(
    State(service): State<Arc<AssessmentService<R, E>>>,
    Path(assessment_id): Path<String>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
    E: EntitlementChecker + 'static,
{
    let answers = match parse_sheet(request.answers) {
        Ok(sheet) => sheet,
        Err(response) => return response,
    };

    let id = AssessmentId(assessment_id);
    let subject = SubjectId(request.subject_id);

    match service.submit_stage2(&subject, &id, answers) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(err) => error_response(err),
    }
}

/// Map service errors onto the HTTP surface. Validation problems are the
/// caller's to fix (4xx); integrity and infrastructure failures are ours
/// (5xx).
fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::InvalidAnswer(_)
        | ServiceError::UnknownQuestion(_)
        | ServiceError::IncompleteAnswerSet { .. }
        | ServiceError::StageViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::PrerequisiteMissing(_) => StatusCode::NOT_FOUND,
        ServiceError::NotOwner(_) => StatusCode::FORBIDDEN,
        ServiceError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
        ServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ServiceError::Repository(RepositoryError::Unavailable(_))
        | ServiceError::Entitlement(_)
        | ServiceError::Integrity(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
