//! Drink handlers

use axum::extract::State;
use shared::models::{DrinkCreate, DrinkUpdate};
use shared::response::{
    DrinkCreatedResponse, DrinkDeletedResponse, DrinkUpdatedResponse, LongListResponse,
    ShortListResponse,
};
use shared::{AppError, Json};

use super::extract::{DrinkId, JsonBody};
use crate::auth::TokenClaims;
use crate::db::StoreError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// GET /drinks - public, recipe without ingredient names
pub async fn list_drinks(State(state): State<AppState>) -> ApiResult<ShortListResponse> {
    let drinks = state.store().list().await?;
    if drinks.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(Json(ShortListResponse::new(
        drinks.iter().map(|d| d.short()).collect(),
    )))
}

/// GET /drinks-detail
pub async fn list_drinks_detail(
    State(state): State<AppState>,
    claims: TokenClaims,
) -> ApiResult<LongListResponse> {
    let drinks = state.store().list().await?;
    if drinks.is_empty() {
        return Err(AppError::NotFound);
    }
    tracing::debug!(
        subject = claims.subject().unwrap_or("-"),
        count = drinks.len(),
        "Listing drink details"
    );
    Ok(Json(LongListResponse::new(
        drinks.iter().map(|d| d.long()).collect(),
    )))
}

/// POST /drinks
pub async fn create_drink(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DrinkCreate>,
) -> ApiResult<DrinkCreatedResponse> {
    let new_drink = payload
        .validate()
        .map_err(|e| AppError::unprocessable(e.to_string()))?;

    let drink = state.store().create(new_drink).await?;
    tracing::info!(id = drink.id, title = %drink.title, "Drink created");
    Ok(Json(DrinkCreatedResponse::new(drink.long())))
}

/// PATCH /drinks/{id}
///
/// Only non-empty fields are applied. A missing id is a 404; any other
/// failure is reported as 422.
pub async fn update_drink(
    State(state): State<AppState>,
    DrinkId(id): DrinkId,
    JsonBody(payload): JsonBody<DrinkUpdate>,
) -> ApiResult<DrinkUpdatedResponse> {
    let update = payload.normalized();

    let drink = match state.store().update(id, &update).await {
        Ok(drink) => drink,
        Err(StoreError::NotFound(_)) => return Err(AppError::NotFound),
        Err(e) => {
            tracing::warn!(id, error = %e, "Drink update failed");
            return Err(AppError::unprocessable(e.to_string()));
        }
    };

    tracing::info!(id, "Drink updated");
    Ok(Json(DrinkUpdatedResponse::new(drink.long())))
}

/// DELETE /drinks/{id}
pub async fn delete_drink(
    State(state): State<AppState>,
    DrinkId(id): DrinkId,
) -> ApiResult<DrinkDeletedResponse> {
    state.store().delete(id).await?;
    tracing::info!(id, "Drink deleted");
    Ok(Json(DrinkDeletedResponse::new(id)))
}
