//! Health API handlers

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::core::ServerState;

/// GET /api/health - liveness probe, unauthenticated
pub async fn health(State(state): State<ServerState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "environment": state.config.environment,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
