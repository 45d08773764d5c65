//! Error types and the JSON error envelope

use super::codes::{AuthErrorCode, ErrorCode};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authorization failure with its own HTTP status
///
/// Produced by the token validator and the permission gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {code} ({description})")]
pub struct AuthError {
    pub status: StatusCode,
    pub code: AuthErrorCode,
    pub description: String,
}

impl AuthError {
    pub fn new(status: StatusCode, code: AuthErrorCode, description: impl Into<String>) -> Self {
        Self {
            status,
            code,
            description: description.into(),
        }
    }

    /// 401 `missing_header`
    pub fn missing_header() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            AuthErrorCode::MissingHeader,
            "Authorization header is expected.",
        )
    }

    /// 401 `invalid_header`
    pub fn invalid_header(description: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            AuthErrorCode::InvalidHeader,
            description,
        )
    }

    /// 401 `invalid_claims`
    pub fn invalid_claims(description: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            AuthErrorCode::InvalidClaims,
            description,
        )
    }

    /// 401 `token_expired`
    pub fn token_expired() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            AuthErrorCode::TokenExpired,
            "Token expired.",
        )
    }

    /// 400 `invalid_claims`: the token carries no `permissions` array
    pub fn permissions_missing() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            AuthErrorCode::InvalidClaims,
            "Permissions not included in JWT.",
        )
    }

    /// 403 `unauthorized`
    pub fn unauthorized() -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            AuthErrorCode::Unauthorized,
            "Permission not found.",
        )
    }

    /// `"<status>: <code>"`, the envelope's `error` value for auth failures
    pub fn composite_code(&self) -> String {
        format!("{}: {}", self.status.as_u16(), self.code)
    }
}

/// Application error
///
/// | Variant | Status |
/// |---------|--------|
/// | `NotFound` | 404 |
/// | `MethodNotAllowed` | 405 |
/// | `Unprocessable` | 422 |
/// | `Internal` | 500 |
/// | `Auth` | carried by the [`AuthError`] |
#[derive(Debug, Error)]
pub enum AppError {
    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    /// The string is logged, never sent to the client
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// The string is logged, never sent to the client
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl AppError {
    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable(reason.into())
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }

    /// Numeric code for the non-auth variants
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::NotFound => Some(ErrorCode::NotFound),
            Self::MethodNotAllowed => Some(ErrorCode::MethodNotAllowed),
            Self::Unprocessable(_) => Some(ErrorCode::Unprocessable),
            Self::Internal(_) => Some(ErrorCode::InternalError),
            Self::Auth(_) => None,
        }
    }

    /// Build the client-facing envelope
    pub fn to_envelope(&self) -> ErrorEnvelope {
        match self {
            Self::Auth(auth) => ErrorEnvelope {
                success: false,
                error: ErrorValue::Composite(auth.composite_code()),
                message: auth.description.clone(),
            },
            other => {
                ErrorEnvelope::from_code(other.error_code().unwrap_or(ErrorCode::InternalError))
            }
        }
    }
}

/// `error` field of the envelope: a number, or `"<status>: <code>"` for auth failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorValue {
    Code(u16),
    Composite(String),
}

/// Uniform JSON error body
///
/// ```json
/// { "success": false, "error": 404, "message": "resource not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorValue,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            success: false,
            error: ErrorValue::Code(code.code()),
            message: code.message().to_string(),
        }
    }
}

/// Result alias used by handlers
pub type AppResult<T> = Result<T, AppError>;
