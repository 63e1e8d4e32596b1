//! Guest API handlers
//!
//! Guest principals are short-lived accounts created for
//! unauthenticated checkout; they can never own a business.

use axum::Json;
use axum::extract::{Path, State};
use chrono::{Duration, Utc};
use serde::Deserialize;

use crate::auth::guards::require_guest;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use shared::models::{User, UserCreate};
use shared::{ApiResponse, AppError, AppResult};

/// Guest accounts expire after this many hours
const GUEST_TTL_HOURS: i64 = 72;

#[derive(Debug, Deserialize)]
pub struct GuestCreatePayload {
    pub name: String,
    pub email: Option<String>,
}

/// POST /api/guests - create a guest principal with a bounded lifetime
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GuestCreatePayload>,
) -> AppResult<ApiResponse<User>> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("name is required"));
    }

    let repo = UserRepository::new(state.db.clone());
    let guest = repo
        .create(UserCreate {
            name: name.to_string(),
            email: payload.email.unwrap_or_default(),
            role: None,
            is_guest: Some(true),
            guest_expires_at: Some(Utc::now() + Duration::hours(GUEST_TTL_HOURS)),
        })
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(ApiResponse::success(guest))
}

/// GET /api/guests/:id - resolve a live guest principal
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let guest = require_guest(&state, &id).await?;
    Ok(Json(guest))
}
