//! Shared types for the drinks API
//!
//! Wire models, response bodies and the error taxonomy used by
//! `drinks-server` and by API clients.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, AuthError};
pub use http;
pub use serde::{Deserialize, Serialize};
