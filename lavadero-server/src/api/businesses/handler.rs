//! Business API handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::auth::CurrentUser;
use crate::auth::guards::require_business_access;
use crate::core::ServerState;
use crate::db::repository::BusinessRepository;
use crate::tenancy::BusinessLifecycle;
use shared::models::{Business, BusinessCreate, BusinessUpdate};
use shared::{ApiResponse, AppError, AppResult};

fn lifecycle(state: &ServerState) -> BusinessLifecycle {
    BusinessLifecycle::new(state.db.clone(), state.events.clone(), state.billing.clone())
}

/// POST /api/businesses - create a business owned by the caller
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<BusinessCreate>,
) -> AppResult<ApiResponse<Business>> {
    let business = lifecycle(&state).create_business(&user.id, payload).await?;
    Ok(ApiResponse::success(business))
}

/// GET /api/businesses - businesses owned by the caller
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Business>>> {
    let repo = BusinessRepository::new(state.db.clone());
    let businesses = repo
        .find_by_owner(&user.id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(businesses))
}

/// GET /api/businesses/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Business>> {
    let business = require_business_access(&state, &user, &id).await?;
    Ok(Json(business))
}

/// PUT /api/businesses/:id
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<BusinessUpdate>,
) -> AppResult<ApiResponse<Business>> {
    let business = lifecycle(&state).update_business(&user, &id, payload).await?;
    Ok(ApiResponse::success(business))
}

/// DELETE /api/businesses/:id - transactional cascade delete
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    lifecycle(&state).delete_business(&user, &id).await?;
    Ok(ApiResponse::ok())
}
