//! Authentication middleware
//!
//! Protected routes are wrapped as an ordered pipeline:
//!
//! ```text
//! require_auth  ->  require_permission(p)  ->  handler
//! ```
//!
//! `require_auth` validates the bearer token and stores [`TokenClaims`] in
//! the request extensions; `require_permission` checks them.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::{AppError, AuthError};
use std::future::Future;
use std::pin::Pin;

use super::claims::TokenClaims;
use super::permissions::authorize;
use super::verifier::ValidationError;
use crate::security_log;
use crate::state::AppState;

/// Authentication middleware
///
/// | Failure | Status |
/// |---------|--------|
/// | no `Authorization` header | 401 `missing_header` |
/// | malformed header or token, unknown key | 401 `invalid_header` |
/// | expired | 401 `token_expired` |
/// | audience or issuer mismatch | 401 `invalid_claims` |
/// | key set unavailable | 500 |
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = match req.headers().get(http::header::AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| {
            AuthError::invalid_header("Authorization header is not valid ASCII.")
        })?),
        None => None,
    };

    let claims = match state.verifier().validate(header).await {
        Ok(claims) => claims,
        Err(ValidationError::Auth(e)) => {
            security_log!(
                "WARN",
                "auth_failed",
                code = e.code.as_str(),
                uri = format!("{:?}", req.uri())
            );
            return Err(e.into());
        }
        Err(e) => {
            tracing::error!(error = %e, "Signing keys unavailable");
            return Err(e.into());
        }
    };

    req.extensions_mut().insert(TokenClaims::new(claims));
    Ok(next.run(req).await)
}

/// Permission middleware factory
///
/// Must run after [`require_auth`].
///
/// ```ignore
/// use axum::middleware;
/// post(handler)
///     .route_layer(middleware::from_fn(require_permission("post:drinks")))
///     .route_layer(middleware::from_fn_with_state(state, require_auth));
/// ```
pub fn require_permission(
    permission: &'static str,
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let verdict = match req.extensions().get::<TokenClaims>() {
                Some(claims) => authorize(claims.as_map(), permission).map_err(|e| {
                    security_log!(
                        "WARN",
                        "permission_denied",
                        subject = claims.subject().unwrap_or("-").to_string(),
                        required_permission = permission
                    );
                    e
                }),
                None => {
                    return Err(AppError::internal(
                        "permission check ran before authentication",
                    ));
                }
            };

            verdict?;
            Ok(next.run(req).await)
        })
    }
}
