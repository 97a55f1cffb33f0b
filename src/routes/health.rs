use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.supabase.auth_health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "backend": "reachable" })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "error", "backend": e.to_string() })),
        ),
    }
}
