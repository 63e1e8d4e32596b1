//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`businesses`] - business lifecycle and profile
//! - [`services`] - catalog entries, nested under a business
//! - [`notes`] - laundry notes and status transitions
//! - [`statistics`] - per-business monthly aggregates
//! - [`guests`] - guest principal resolution
//!
//! Every business-scoped route takes the business id as its one
//! explicit path parameter; handlers pass it through the ownership
//! guard before touching anything.

pub mod businesses;
pub mod guests;
pub mod health;
pub mod notes;
pub mod services;
pub mod statistics;

use axum::Router;
use axum::middleware;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// All API routes, without middleware
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(businesses::router())
        .merge(services::router())
        .merge(notes::router())
        .merge(statistics::router())
        .merge(guests::router())
}

/// Full application: routes plus auth, tracing, request-id and CORS
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::middleware::require_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}
