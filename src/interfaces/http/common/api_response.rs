//! Common API response envelope and the outcome-to-HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::shared::types::{OperationResult, PageInfo, ValidationError};

/// Standard response wrapper for every REST endpoint.
///
/// Success: `{"data": ...}`, plus `"meta"` on list endpoints.
/// Failure: `{"errors": [...]}` with structured error entries.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Payload. Absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Pagination metadata. Present on list responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageInfo>,
    /// Structured errors. Absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            meta: None,
            errors: None,
        }
    }

    pub fn list(data: T, meta: PageInfo) -> Self {
        Self {
            data: Some(data),
            meta: Some(meta),
            errors: None,
        }
    }

    pub fn errors(errors: Vec<ValidationError>) -> Self {
        Self {
            data: None,
            meta: None,
            errors: Some(errors),
        }
    }
}

/// Maps a data-access outcome to an HTTP response.
///
/// The only place where outcome classes meet status codes: success is 200,
/// a validation failure 400, a missing entity 404, a backend fault 500.
pub fn respond<T: Serialize>(result: OperationResult<T>) -> Response {
    match result {
        OperationResult::Success(data) => {
            (StatusCode::OK, Json(ApiResponse::data(data))).into_response()
        }
        OperationResult::SuccessList(items, info) => {
            (StatusCode::OK, Json(ApiResponse::list(items, info))).into_response()
        }
        OperationResult::ValidationFailed(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<T>::errors(errors)),
        )
            .into_response(),
        OperationResult::NotFound => StatusCode::NOT_FOUND.into_response(),
        OperationResult::Failed(fault) => {
            // The structured detail stays server-side; clients get an
            // opaque 500 with a message.
            error!("Data-access operation failed: {}", fault);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<T>::errors(vec![ValidationError::internal(
                    fault.to_string(),
                )])),
            )
                .into_response()
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
