//! Statistics API handlers

use axum::Json;
use axum::extract::{Path, State};

use crate::auth::CurrentUser;
use crate::auth::guards::require_business_access;
use crate::core::ServerState;
use crate::notes::{MonthlyStat, NoteMachine};
use shared::AppResult;

/// GET /api/businesses/:business_id/statistics - monthly note counts
/// and collected revenue, newest month first
pub async fn monthly(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(business_id): Path<String>,
) -> AppResult<Json<Vec<MonthlyStat>>> {
    let business = require_business_access(&state, &user, &business_id).await?;
    let stats = NoteMachine::from_state(&state).monthly_stats(&business).await?;
    Ok(Json(stats))
}
