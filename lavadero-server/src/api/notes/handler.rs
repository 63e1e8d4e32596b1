//! Note API handlers

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::auth::guards::{require_business_access, require_onboarded};
use crate::core::ServerState;
use crate::notes::NoteMachine;
use shared::models::{AbonoInput, Business, FulfillmentStatus, Note, NoteCreate, PaymentStatus};
use shared::{ApiResponse, AppResult};

async fn scoped(
    state: &ServerState,
    user: &CurrentUser,
    business_id: &str,
) -> AppResult<Business> {
    require_onboarded(state, user).await?;
    require_business_access(state, user, business_id).await
}

/// GET /api/businesses/:business_id/notes
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(business_id): Path<String>,
) -> AppResult<Json<Vec<Note>>> {
    let business = scoped(&state, &user, &business_id).await?;
    let notes = NoteMachine::from_state(&state).list(&business).await?;
    Ok(Json(notes))
}

/// POST /api/businesses/:business_id/notes
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(business_id): Path<String>,
    Json(payload): Json<NoteCreate>,
) -> AppResult<ApiResponse<Note>> {
    let business = scoped(&state, &user, &business_id).await?;
    let note = NoteMachine::from_state(&state).create(&business, payload).await?;
    Ok(ApiResponse::success(note))
}

/// GET /api/businesses/:business_id/notes/:note_id
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((business_id, note_id)): Path<(String, String)>,
) -> AppResult<Json<Note>> {
    let business = scoped(&state, &user, &business_id).await?;
    let note = NoteMachine::from_state(&state).get(&business, &note_id).await?;
    Ok(Json(note))
}

#[derive(Debug, Deserialize)]
pub struct PaymentTransitionPayload {
    pub status: PaymentStatus,
    pub abono: Option<AbonoInput>,
}

/// PUT /api/businesses/:business_id/notes/:note_id/payment-status
pub async fn payment_transition(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((business_id, note_id)): Path<(String, String)>,
    Json(payload): Json<PaymentTransitionPayload>,
) -> AppResult<ApiResponse<Note>> {
    let business = scoped(&state, &user, &business_id).await?;
    let note = NoteMachine::from_state(&state)
        .request_payment_transition(&business, &note_id, payload.status, payload.abono)
        .await?;
    Ok(ApiResponse::success(note))
}

#[derive(Debug, Deserialize)]
pub struct FulfillmentTransitionPayload {
    pub status: FulfillmentStatus,
}

/// PUT /api/businesses/:business_id/notes/:note_id/fulfillment-status
pub async fn fulfillment_transition(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((business_id, note_id)): Path<(String, String)>,
    Json(payload): Json<FulfillmentTransitionPayload>,
) -> AppResult<ApiResponse<Note>> {
    let business = scoped(&state, &user, &business_id).await?;
    let note = NoteMachine::from_state(&state)
        .request_fulfillment_transition(&business, &note_id, payload.status)
        .await?;
    Ok(ApiResponse::success(note))
}

#[derive(Debug, Deserialize)]
pub struct BulkFulfillmentPayload {
    pub note_ids: Vec<String>,
    pub status: FulfillmentStatus,
}

/// Per-note outcome of a bulk transition
#[derive(Debug, Serialize)]
pub struct BulkFulfillmentOutcome {
    pub updated: Vec<Note>,
    pub failed: Vec<BulkFulfillmentFailure>,
}

#[derive(Debug, Serialize)]
pub struct BulkFulfillmentFailure {
    pub note_id: String,
    pub code: u16,
    pub message: String,
}

/// POST /api/businesses/:business_id/notes/bulk/fulfillment-status
///
/// Applies the same transition to many notes; each note succeeds or
/// fails on its own.
pub async fn bulk_fulfillment(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(business_id): Path<String>,
    Json(payload): Json<BulkFulfillmentPayload>,
) -> AppResult<ApiResponse<BulkFulfillmentOutcome>> {
    let business = scoped(&state, &user, &business_id).await?;
    let machine = NoteMachine::from_state(&state);

    let mut outcome = BulkFulfillmentOutcome {
        updated: Vec::new(),
        failed: Vec::new(),
    };
    for note_id in payload.note_ids {
        match machine
            .request_fulfillment_transition(&business, &note_id, payload.status)
            .await
        {
            Ok(note) => outcome.updated.push(note),
            Err(e) => outcome.failed.push(BulkFulfillmentFailure {
                note_id,
                code: e.code.code(),
                message: e.message,
            }),
        }
    }
    Ok(ApiResponse::success(outcome))
}

/// POST /api/businesses/:business_id/notes/:note_id/abonos
pub async fn add_abono(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((business_id, note_id)): Path<(String, String)>,
    Json(payload): Json<AbonoInput>,
) -> AppResult<ApiResponse<Note>> {
    let business = scoped(&state, &user, &business_id).await?;
    let note = NoteMachine::from_state(&state)
        .add_abono(&business, &note_id, payload)
        .await?;
    Ok(ApiResponse::success(note))
}

/// DELETE /api/businesses/:business_id/notes/:note_id
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((business_id, note_id)): Path<(String, String)>,
) -> AppResult<ApiResponse<()>> {
    let business = scoped(&state, &user, &business_id).await?;
    NoteMachine::from_state(&state).delete(&business, &note_id).await?;
    Ok(ApiResponse::ok())
}
