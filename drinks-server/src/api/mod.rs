//! HTTP routes
//!
//! | Route | Permission |
//! |-------|------------|
//! | `GET /drinks` | public |
//! | `GET /drinks-detail` | `get:drinks-detail` |
//! | `POST /drinks` | `post:drinks` |
//! | `PATCH /drinks/{id}` | `patch:drinks` |
//! | `DELETE /drinks/{id}` | `delete:drinks` |
//! | `GET /health` | public |

pub mod drinks;
pub mod extract;
pub mod health;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{MethodRouter, delete, get, patch, post};
use shared::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use self::extract::DrinkId;
use crate::auth::permissions::{DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS};
use crate::auth::{require_auth, require_permission};
use crate::state::AppState;

/// Wrap a method router in `require_auth` then `require_permission(permission)`
fn protected(
    route: MethodRouter<AppState>,
    state: &AppState,
    permission: &'static str,
) -> MethodRouter<AppState> {
    route
        .route_layer(middleware::from_fn(require_permission(permission)))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Non-integer ids do not name a route: 404 before auth or method checks
async fn require_drink_id(_: DrinkId, req: Request, next: Next) -> Response {
    next.run(req).await
}

/// Create the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/drinks",
            get(drinks::list_drinks).merge(protected(
                post(drinks::create_drink),
                &state,
                POST_DRINKS,
            )),
        )
        .route(
            "/drinks-detail",
            protected(
                get(drinks::list_drinks_detail),
                &state,
                GET_DRINKS_DETAIL,
            ),
        )
        .route(
            "/drinks/{id}",
            protected(patch(drinks::update_drink), &state, PATCH_DRINKS)
                .merge(protected(
                    delete(drinks::delete_drink),
                    &state,
                    DELETE_DRINKS,
                ))
                .fallback(method_not_allowed)
                .layer(middleware::from_fn(require_drink_id)),
        )
        .route("/health", get(health::health_check))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
