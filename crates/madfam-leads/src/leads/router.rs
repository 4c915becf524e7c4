use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{FormKind, LeadId, LeadSubmission};
use super::repository::{LeadNotifier, LeadRepository, RepositoryError, WebhookDispatcher};
use super::roi::{RoiError, RoiInputs};
use super::service::{LeadCaptureService, LeadServiceError};
use super::validation::ValidationErrors;

type SharedService<R, N, W> = Arc<LeadCaptureService<R, N, W>>;

/// Router builder exposing the lead capture and ROI endpoints.
pub fn lead_router<R, N, W>(service: SharedService<R, N, W>) -> Router
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
    W: WebhookDispatcher + 'static,
{
    Router::new()
        .route("/api/v1/leads/demo", post(demo_handler::<R, N, W>))
        .route("/api/v1/leads/contact", post(contact_handler::<R, N, W>))
        .route("/api/v1/leads/roi", post(roi_lead_handler::<R, N, W>))
        .route("/api/v1/leads/:lead_id", get(status_handler::<R, N, W>))
        .route("/api/v1/roi/calculate", post(roi_calculate_handler::<R, N, W>))
        .with_state(service)
}

pub(crate) async fn demo_handler<R, N, W>(
    State(service): State<SharedService<R, N, W>>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
    W: WebhookDispatcher + 'static,
{
    submit_form(&service, FormKind::Demo, payload)
}

pub(crate) async fn contact_handler<R, N, W>(
    State(service): State<SharedService<R, N, W>>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
    W: WebhookDispatcher + 'static,
{
    submit_form(&service, FormKind::Contact, payload)
}

pub(crate) async fn roi_lead_handler<R, N, W>(
    State(service): State<SharedService<R, N, W>>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
    W: WebhookDispatcher + 'static,
{
    submit_form(&service, FormKind::RoiCalculator, payload)
}

fn submit_form<R, N, W>(
    service: &LeadCaptureService<R, N, W>,
    form: FormKind,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
    W: WebhookDispatcher + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => return malformed_body(rejection),
    };

    match service.submit(form, submission) {
        Ok(receipt) => {
            let payload = json!({
                "success": true,
                "leadId": receipt.lead_id.0,
                "score": receipt.score,
                "tier": receipt.tier,
                "tags": receipt.tags,
                "message": receipt.message,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(LeadServiceError::Validation(errors)) => validation_failed(&errors),
        Err(other) => {
            error!(form = form.slug(), error = %other, "lead capture failed");
            internal_error()
        }
    }
}

pub(crate) async fn status_handler<R, N, W>(
    State(service): State<SharedService<R, N, W>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
    W: WebhookDispatcher + 'static,
{
    let id = LeadId(lead_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(LeadServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "success": false,
                "error": "lead not found",
                "leadId": id.0,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            error!(lead_id = %id.0, error = %other, "lead lookup failed");
            internal_error()
        }
    }
}

pub(crate) async fn roi_calculate_handler<R, N, W>(
    State(service): State<SharedService<R, N, W>>,
    payload: Result<Json<RoiInputs>, JsonRejection>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
    W: WebhookDispatcher + 'static,
{
    let inputs = match payload {
        Ok(Json(inputs)) => inputs,
        Err(rejection) => return malformed_body(rejection),
    };

    match service.calculate_roi(&inputs) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(RoiError::InvalidInput { field }) => validation_failed(&ValidationErrors::single(
            field,
            "must be a finite, non-negative number",
        )),
        Err(overflow @ RoiError::Overflow { .. }) => {
            validation_failed(&ValidationErrors::single("body", overflow.to_string()))
        }
    }
}

fn validation_failed(errors: &ValidationErrors) -> Response {
    let payload = json!({
        "success": false,
        "error": "Validation failed",
        "details": errors.errors,
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn malformed_body(rejection: JsonRejection) -> Response {
    validation_failed(&ValidationErrors::single("body", rejection.body_text()))
}

fn internal_error() -> Response {
    let payload = json!({
        "success": false,
        "error": "Internal server error",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
