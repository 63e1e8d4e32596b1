//! Lavadero Server - multi-tenant laundry business platform
//!
//! # Architecture
//!
//! The server is a composite domain engine around four components:
//!
//! - **Authorization gate** (`auth`): JWT principal resolution plus
//!   business-ownership, self-or-admin, guest and onboarding checks
//! - **Catalog** (`catalog`): validation/normalization of a business's
//!   service catalog (flat-priced and size-variant entries)
//! - **Note state machine** (`notes`): two-axis lifecycle of a laundry
//!   note with partial-payment (abono) accounting
//! - **Business lifecycle** (`tenancy`): transactional create/delete of
//!   a business with its catalog, notes and owner back-references
//!
//! # Module structure
//!
//! ```text
//! lavadero-server/src/
//! ├── core/          # Config, state, server bootstrap
//! ├── auth/          # JWT auth, ownership guards
//! ├── db/            # Embedded SurrealDB, repositories
//! ├── catalog/       # Service validation/normalization
//! ├── pricing/       # Pricing rules and engine
//! ├── notes/         # Note state machine and statistics
//! ├── tenancy/       # Business lifecycle, billing client
//! ├── notify/        # WhatsApp notification sender
//! ├── events/        # In-process real-time event bus
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Logger
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod events;
pub mod notes;
pub mod notify;
pub mod pricing;
pub mod tenancy;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use events::{DomainEvent, EventBus};
pub use notes::NoteMachine;
pub use pricing::PricingRules;
pub use tenancy::BusinessLifecycle;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured WARN/ERROR entries for auth events
#[macro_export]
macro_rules! security_log {
    ("WARN", $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::warn!(event = $event $(, $key = %$value)*, "security event");
    };
    ("ERROR", $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::error!(event = $event $(, $key = %$value)*, "security event");
    };
}
