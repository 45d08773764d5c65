//! Authorization
//!
//! - [`TokenVerifier`] - bearer token validation against the issuer's keys
//! - [`KeySource`] - where the trusted keys come from
//! - [`authorize`] - permission gate
//! - [`require_auth`] / [`require_permission`] - axum middleware

pub mod claims;
pub mod jwks;
pub mod middleware;
pub mod permissions;
pub mod verifier;

pub use claims::{Claims, TokenClaims};
pub use jwks::{KeySource, KeySourceError, RemoteKeySource, StaticKeySource};
pub use middleware::{require_auth, require_permission};
pub use permissions::authorize;
pub use verifier::{TokenVerifier, ValidationError, bearer_token};
