//! HTTP error mapping for board operations.

use crate::board::services::BoardServiceError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is malformed or lacks required fields.
    #[error("{0}")]
    BadRequest(String),
    /// The board service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] BoardServiceError),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(BoardServiceError::Domain(err)) if err.is_not_found() => {
                StatusCode::NOT_FOUND
            }
            Self::Service(BoardServiceError::Domain(_)) => StatusCode::BAD_REQUEST,
            Self::Service(BoardServiceError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
