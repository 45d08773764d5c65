//! Bearer token validation
//!
//! Parses the `Authorization` header, checks the token header against the
//! algorithm allow-list and the trusted key ids, then verifies signature,
//! expiry, audience and issuer with `jsonwebtoken`.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use shared::{AppError, AuthError};
use std::sync::Arc;
use thiserror::Error;

use super::claims::Claims;
use super::jwks::{KeySource, KeySourceError};

/// Signing algorithms accepted from the issuer (asymmetric only)
pub const ALLOWED_ALGORITHMS: &[Algorithm] = &[Algorithm::RS256];

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Keys(#[from] KeySourceError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::Auth(auth) => AppError::Auth(auth),
            ValidationError::Keys(keys) => AppError::internal(keys.to_string()),
        }
    }
}

/// Extract the token from an `Authorization` header value
///
/// The value must be exactly `<scheme> <token>` with `scheme`
/// case-insensitively equal to `bearer`.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or_else(AuthError::missing_header)?;
    let parts: Vec<&str> = header.split(' ').collect();

    match parts.as_slice() {
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AuthError::invalid_header(
            "Authorization header must start with \"Bearer\".",
        )),
        [_] => Err(AuthError::invalid_header("Token not found.")),
        [_, token] if !token.is_empty() => Ok(*token),
        _ => Err(AuthError::invalid_header(
            "Authorization header must be bearer token.",
        )),
    }
}

fn map_jwt_error(e: jsonwebtoken::errors::Error) -> AuthError {
    match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::token_expired(),
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_) => {
            AuthError::invalid_claims("Incorrect claims. Please, check the audience and issuer.")
        }
        _ => AuthError::invalid_header("Unable to parse authentication token."),
    }
}

/// Validates bearer tokens issued by one trusted issuer for one audience
#[derive(Clone)]
pub struct TokenVerifier {
    keys: Arc<dyn KeySource>,
    audience: String,
    issuer: String,
}

impl TokenVerifier {
    pub fn new(
        keys: Arc<dyn KeySource>,
        audience: impl Into<String>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            audience: audience.into(),
            issuer: issuer.into(),
        }
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Validate a raw `Authorization` header value and return the claims unchanged
    pub async fn validate(&self, authorization: Option<&str>) -> Result<Claims, ValidationError> {
        let token = bearer_token(authorization)?;

        let header = decode_header(token)
            .map_err(|_| AuthError::invalid_header("Authorization malformed."))?;

        if !ALLOWED_ALGORITHMS.contains(&header.alg) {
            return Err(AuthError::invalid_header("Unsupported signing algorithm.").into());
        }

        let kid = header
            .kid
            .as_deref()
            .ok_or_else(|| AuthError::invalid_header("Authorization malformed."))?;

        let keys = self.keys.key_set().await?;
        let jwk = keys
            .find(kid)
            .ok_or_else(|| AuthError::invalid_header("Unable to find the appropriate key."))?;
        let decoding_key = DecodingKey::from_jwk(jwk)
            .map_err(|_| AuthError::invalid_header("Unable to find the appropriate key."))?;

        let mut validation = Validation::new(header.alg);
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        let data = decode::<Claims>(token, &decoding_key, &validation).map_err(map_jwt_error)?;
        Ok(data.claims)
    }
}
