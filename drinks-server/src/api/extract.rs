//! Extractors that reject with the API error envelope

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use shared::{AppError, Json};

/// JSON body; any rejection (syntax, type, content type) is a 422
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::unprocessable(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Integer `{id}` path segment; anything else does not name a drink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrinkId(pub i64);

impl<S> FromRequestParts<S> for DrinkId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        Ok(Self(id))
    }
}
