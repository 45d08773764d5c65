//! Error codes for the drinks API
//!
//! Two families of codes exist:
//! - [`ErrorCode`]: numeric codes rendered as the `error` field of the envelope
//!   (`404`, `405`, `422`, `500`)
//! - [`AuthErrorCode`]: symbolic codes carried by authorization failures and
//!   rendered as `"<status>: <code>"`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric error code
///
/// The discriminant doubles as the HTTP status and as the value written to
/// the envelope's `error` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    /// Resource not found
    NotFound = 404,
    /// Method not allowed for the matched path
    MethodNotAllowed = 405,
    /// Request body missing required fields or malformed
    Unprocessable = 422,
    /// Unexpected failure
    InternalError = 500,
}

impl ErrorCode {
    /// Fixed client-facing message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "resource not found",
            Self::MethodNotAllowed => "method not allowed for the requested URL",
            Self::Unprocessable => "unprocessable",
            Self::InternalError => "Something went wrong.",
        }
    }

    pub fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Returned when a numeric value does not name a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            404 => Ok(Self::NotFound),
            405 => Ok(Self::MethodNotAllowed),
            422 => Ok(Self::Unprocessable),
            500 => Ok(Self::InternalError),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Symbolic authorization failure code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorCode {
    /// No `Authorization` header
    MissingHeader,
    /// Header or token structure rejected
    InvalidHeader,
    /// Claims failed audience/issuer checks or lack the permissions field
    InvalidClaims,
    /// Token `exp` is in the past
    TokenExpired,
    /// Token lacks the permission required by the route
    Unauthorized,
}

impl AuthErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::InvalidHeader => "invalid_header",
            Self::InvalidClaims => "invalid_claims",
            Self::TokenExpired => "token_expired",
            Self::Unauthorized => "unauthorized",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
