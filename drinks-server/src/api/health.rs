//! Health check endpoint

use axum::extract::State;
use shared::Json;

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_ok = state.store().ping().await;
    let status = if db_ok { "ok" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "db": db_ok
    }))
}
