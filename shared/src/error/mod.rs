//! Unified error system for the drinks API
//!
//! - [`ErrorCode`]: numeric codes for not-found, method-not-allowed,
//!   unprocessable and internal failures
//! - [`AuthErrorCode`] / [`AuthError`]: authorization failures carrying their
//!   own HTTP status
//! - [`AppError`]: the error every handler returns
//! - [`ErrorEnvelope`]: the JSON body written for every failure
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, AuthError, ErrorValue};
//!
//! let err = AppError::from(AuthError::unauthorized());
//! let body = err.to_envelope();
//! assert_eq!(body.error, ErrorValue::Composite("403: unauthorized".into()));
//! ```

mod codes;
mod http;
mod types;

pub use codes::{AuthErrorCode, ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, AuthError, ErrorEnvelope, ErrorValue};
