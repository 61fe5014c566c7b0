/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>`, which converts to the matching
/// status code and a JSON error body.
///
/// # Response Body
///
/// ```json
/// {
///   "error": "not_found",
///   "message": "User not found",
///   "detail": "User not found"
/// }
/// ```
///
/// `detail` repeats `message` for clients that look for the conventional
/// `{"detail": ...}` shape.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use taskdeck_shared::store::StoreError;
use thiserror::Error;
use utoipa::ToSchema;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// Not found (404): unknown user or task ID
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unprocessable entity (422): request body does not match the schema
    #[error("Validation failed: {} errors", .0.len())]
    ValidationError(Vec<ValidationErrorDetail>),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDetail {
    /// Field (or `body`) that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Error response format
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code (e.g., "not_found", "validation_error")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Same text as `message`
    pub detail: String,

    /// Optional validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error_code, message, details) = match self {
            ApiError::NotFound(msg) => ("not_found", msg, None),
            ApiError::ValidationError(errors) => (
                "validation_error",
                "Request validation failed".to_string(),
                Some(errors),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            detail: message.clone(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UserNotFound(_) => ApiError::NotFound("User not found".to_string()),
            StoreError::TaskNotFound(_) => ApiError::NotFound("Task not found".to_string()),
        }
    }
}

/// Convert JSON body rejections to API errors
///
/// Every rejection is a 422 against `body`: schema mismatches, syntax errors
/// and a missing `application/json` content type alike.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "body".to_string(),
            message: rejection.body_text(),
        }])
    }
}

/// JSON body extractor whose rejections are reported as [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidatedJson<T>(pub T);
