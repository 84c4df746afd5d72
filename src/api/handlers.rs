//! HTTP request handlers for the Payroll Computation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate, compute_salary};
use crate::error::EngineError;
use crate::merge::merge;
use crate::models::Payroll;
use crate::normalize::normalize;

use super::request::{AggregateRequest, MergeRequest, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/aggregate", post(aggregate_handler))
        .route("/salary", post(salary_handler))
        .route("/normalize", post(normalize_handler))
        .route("/merge", post(merge_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection onto an API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(err: EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for the POST /aggregate endpoint.
///
/// Aggregates the supplied attendance and leave feeds into an attendance
/// summary for one staff member and month. A missing feed surfaces as
/// `DATA_UNAVAILABLE` rather than a zeroed summary.
async fn aggregate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AggregateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aggregate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let Some(attendance) = request.attendance else {
        warn!(correlation_id = %correlation_id, staff_id = %request.staff_id, "Attendance feed unavailable");
        return engine_error_response(EngineError::DataUnavailable {
            feed: "attendance".to_string(),
        });
    };
    let Some(leaves) = request.leaves else {
        warn!(correlation_id = %correlation_id, staff_id = %request.staff_id, "Leave feed unavailable");
        return engine_error_response(EngineError::DataUnavailable {
            feed: "leave".to_string(),
        });
    };

    match aggregate(
        &request.staff_id,
        request.month,
        request.year,
        &attendance,
        &leaves,
        state.config().config(),
    ) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                staff_id = %summary.staff_id,
                days_worked = summary.days_worked,
                paid_leaves = %summary.paid_leaves,
                unpaid_days = %summary.unpaid_days,
                "Aggregation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(summary),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Aggregation failed");
            engine_error_response(err)
        }
    }
}

/// Handler for the POST /salary endpoint.
///
/// Computes the proportional net-salary/deduction split for the supplied
/// day counts; invoked reactively by the edit form.
async fn salary_handler(
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let breakdown = compute_salary(
        request.basic_salary,
        request.total_days,
        request.days_worked,
        request.paid_leaves,
    );
    info!(
        correlation_id = %correlation_id,
        net_salary = %breakdown.net_salary,
        deductions = %breakdown.deductions,
        "Salary computed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(breakdown),
    )
        .into_response()
}

/// Handler for the POST /normalize endpoint.
///
/// Accepts a raw payroll object or a list of them and returns the canonical
/// form(s). The in-process normalizer is total; only a body that is neither
/// an object nor an array is rejected.
async fn normalize_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let raw = match payload {
        Ok(Json(value)) => value,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    match &raw {
        Value::Object(_) => {
            let payroll = normalize(&raw);
            info!(correlation_id = %correlation_id, staff_id = %payroll.staff_id, "Normalized payroll record");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(payroll),
            )
                .into_response()
        }
        Value::Array(items) => {
            let payrolls: Vec<Payroll> = items.iter().map(normalize).collect();
            info!(correlation_id = %correlation_id, count = payrolls.len(), "Normalized payroll batch");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(payrolls),
            )
                .into_response()
        }
        _ => {
            warn!(correlation_id = %correlation_id, "Normalize body is not an object or array");
            engine_error_response(EngineError::MalformedRecord {
                message: "body must be a JSON object or an array of objects".to_string(),
            })
        }
    }
}

/// Handler for the POST /merge endpoint.
///
/// Normalizes the raw payroll list, then merges it with the staff roster
/// for the selected period, synthesizing pending placeholders for staff
/// without a generated record.
async fn merge_handler(
    payload: Result<Json<MergeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing merge request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let payrolls: Vec<Payroll> = request.payrolls.iter().map(normalize).collect();
    let rows = merge(&request.staff, &payrolls, &request.month, &request.year);

    let ghost_count = rows.iter().filter(|r| r.is_ghost()).count();
    info!(
        correlation_id = %correlation_id,
        staff_count = request.staff.len(),
        row_count = rows.len(),
        ghost_count,
        "Merge completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(rows),
    )
        .into_response()
}
