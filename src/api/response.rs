//! Response envelope and error mapping
//!
//! Every JSON response has the shape
//! `{success, data?, message?, error?}`. Errors carry an [`ErrorKind`] and an
//! HTTP status derived from it; internal failures are logged here and reach
//! the client only as an opaque message.

use crate::domain::{ErrorKind, HearscreenError};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Message returned in place of internal error details
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON envelope shared by all endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// Success without a payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    fn failure(kind: ErrorKind, message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            error: Some(kind),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// HTTP status for an error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::DuplicateResult => StatusCode::CONFLICT,
        ErrorKind::InvalidCredentials | ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handler error, rendered through the envelope
#[derive(Debug)]
pub struct ApiError(pub HearscreenError);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<HearscreenError> for ApiError {
    fn from(err: HearscreenError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(HearscreenError::Validation(format!(
            "Invalid JSON body: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(HearscreenError::Validation(format!(
            "Invalid path parameter: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(HearscreenError::Validation(format!(
            "Invalid query string: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let status = status_for(kind);

        let message = if self.0.is_client_safe() {
            tracing::debug!(error = %self.0, kind = %kind, "Request rejected");
            self.0.to_string()
        } else {
            tracing::error!(error = %self.0, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        };

        (status, ApiResponse::failure(kind, message)).into_response()
    }
}
