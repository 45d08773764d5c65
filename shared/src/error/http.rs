//! HTTP status mapping and axum response rendering

use super::codes::ErrorCode;
use super::types::AppError;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Auth(auth) => auth.status,
            other => other
                .error_code()
                .map(|code| code.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(reason) => {
                tracing::error!(target: "internal", error = %reason, "Internal error occurred");
            }
            AppError::Unprocessable(reason) => {
                tracing::debug!(reason = %reason, "Unprocessable request");
            }
            _ => {}
        }

        (self.http_status(), Json(self.to_envelope())).into_response()
    }
}
