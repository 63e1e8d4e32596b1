//! Catalog API handlers

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::auth::guards::{require_business_access, require_onboarded};
use crate::catalog::{BatchMode, BatchOutcome, CatalogManager};
use crate::core::ServerState;
use shared::models::{Business, Service, ServiceInput, ServiceUpdate};
use shared::{ApiResponse, AppResult};

fn manager(state: &ServerState) -> CatalogManager {
    CatalogManager::new(state.db.clone(), state.events.clone())
}

async fn scoped(
    state: &ServerState,
    user: &CurrentUser,
    business_id: &str,
) -> AppResult<Business> {
    require_onboarded(state, user).await?;
    require_business_access(state, user, business_id).await
}

/// GET /api/businesses/:business_id/services
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(business_id): Path<String>,
) -> AppResult<Json<Vec<Service>>> {
    let business = scoped(&state, &user, &business_id).await?;
    let services = manager(&state).list_services(&business).await?;
    Ok(Json(services))
}

/// POST /api/businesses/:business_id/services - single create, aborts on
/// any validation error
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(business_id): Path<String>,
    Json(payload): Json<ServiceInput>,
) -> AppResult<ApiResponse<Service>> {
    let business = scoped(&state, &user, &business_id).await?;
    let service = manager(&state).create_service(&business, &payload).await?;
    Ok(ApiResponse::success(service))
}

#[derive(Debug, Deserialize)]
pub struct BulkPayload {
    pub services: Vec<ServiceInput>,
    /// "partial" keeps valid rows, "atomic" rejects the whole batch
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    "partial".into()
}

/// POST /api/businesses/:business_id/services/bulk
pub async fn create_bulk(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(business_id): Path<String>,
    Json(payload): Json<BulkPayload>,
) -> AppResult<ApiResponse<BatchOutcome>> {
    let business = scoped(&state, &user, &business_id).await?;
    let mode = match payload.mode.as_str() {
        "atomic" => BatchMode::Atomic,
        _ => BatchMode::Partial,
    };
    let outcome = manager(&state)
        .create_bulk(&business, &payload.services, mode)
        .await?;
    Ok(ApiResponse::success(outcome))
}

/// PUT /api/businesses/:business_id/services/:service_id
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((business_id, service_id)): Path<(String, String)>,
    Json(payload): Json<ServiceUpdate>,
) -> AppResult<ApiResponse<Service>> {
    let business = scoped(&state, &user, &business_id).await?;
    let service = manager(&state)
        .update_service(&business, &service_id, &payload)
        .await?;
    Ok(ApiResponse::success(service))
}

/// DELETE /api/businesses/:business_id/services/:service_id
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((business_id, service_id)): Path<(String, String)>,
) -> AppResult<ApiResponse<()>> {
    let business = scoped(&state, &user, &business_id).await?;
    manager(&state).delete_service(&business, &service_id).await?;
    Ok(ApiResponse::ok())
}
