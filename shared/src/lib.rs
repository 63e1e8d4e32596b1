//! Shared types for the Lavadero platform
//!
//! Common types used across crates: domain models (users, businesses,
//! services, laundry notes), the unified error system, and the API
//! response envelope.

pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
