//! Decoded token claims
//!
//! Created by [`require_auth`](super::require_auth) and stored in request
//! extensions for the rest of the request.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde_json::{Map, Value};
use shared::AppError;

/// Raw claim mapping of a verified token
pub type Claims = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims(Claims);

impl TokenClaims {
    pub fn new(claims: Claims) -> Self {
        Self(claims)
    }

    pub fn as_map(&self) -> &Claims {
        &self.0
    }

    /// `sub` claim, if present
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }
}

impl<S> FromRequestParts<S> for TokenClaims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .ok_or_else(|| AppError::internal("handler requires claims but route is not authenticated"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> TokenClaims {
        match value {
            Value::Object(map) => TokenClaims::new(map),
            _ => panic!("claims fixture must be an object"),
        }
    }

    #[test]
    fn test_subject() {
        let claims = claims(json!({
            "sub": "auth0|manager",
            "permissions": ["get:drinks-detail", "post:drinks"]
        }));
        assert_eq!(claims.subject(), Some("auth0|manager"));
        assert_eq!(claims.as_map()["permissions"][1], "post:drinks");
    }

    #[test]
    fn test_subject_must_be_string() {
        assert_eq!(claims(json!({"sub": 42})).subject(), None);
        assert_eq!(claims(json!({})).subject(), None);
    }
}
