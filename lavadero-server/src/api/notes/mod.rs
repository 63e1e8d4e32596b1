//! Note API module

mod handler;

use axum::{Router, routing::get, routing::post, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/businesses/{business_id}/notes", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Bulk transition must precede /{note_id} to avoid path conflicts
        .route("/bulk/fulfillment-status", post(handler::bulk_fulfillment))
        .route("/{note_id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{note_id}/payment-status", put(handler::payment_transition))
        .route(
            "/{note_id}/fulfillment-status",
            put(handler::fulfillment_transition),
        )
        .route("/{note_id}/abonos", post(handler::add_abono))
}
