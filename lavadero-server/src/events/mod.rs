//! Real-time domain events
//!
//! Fire-and-forget broadcast of domain mutations. Subscribers (e.g. a
//! push channel in the presentation layer) receive every event emitted
//! after they subscribe; a full receiver drops its oldest events rather
//! than blocking the emitter.

mod bus;

pub use bus::EventBus;

use serde::Serialize;

use crate::notes::MonthlyStat;

/// One broadcast domain event
///
/// Event names are part of the client contract and stay stable even if
/// the internal variant names change.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum DomainEvent {
    BusinessCreated { id: String, owner_id: String },
    BusinessUpdated { id: String },
    BusinessDeleted { id: String, owner_id: String },
    ServiceCreated { id: String, business_id: String },
    ServiceUpdated { id: String, business_id: String },
    ServiceDeleted { id: String, business_id: String },
    NoteCreated { id: String, business_id: String },
    NoteUpdated { id: String, business_id: String },
    NoteDeleted { id: String, business_id: String },
    LaundryStatsUpdated { business_id: String, stats: Vec<MonthlyStat> },
}

impl DomainEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Self::BusinessCreated { .. } => "businessCreated",
            Self::BusinessUpdated { .. } => "businessUpdated",
            Self::BusinessDeleted { .. } => "businessDeleted",
            Self::ServiceCreated { .. } => "serviceCreated",
            Self::ServiceUpdated { .. } => "serviceUpdated",
            Self::ServiceDeleted { .. } => "serviceDeleted",
            Self::NoteCreated { .. } => "noteCreated",
            Self::NoteUpdated { .. } => "noteUpdated",
            Self::NoteDeleted { .. } => "noteDeleted",
            Self::LaundryStatsUpdated { .. } => "laundryStatsUpdated",
        }
    }

    /// Business the event concerns, when it has one
    pub fn business_id(&self) -> Option<&str> {
        match self {
            Self::BusinessCreated { id, .. }
            | Self::BusinessUpdated { id }
            | Self::BusinessDeleted { id, .. } => Some(id),
            Self::ServiceCreated { business_id, .. }
            | Self::ServiceUpdated { business_id, .. }
            | Self::ServiceDeleted { business_id, .. }
            | Self::NoteCreated { business_id, .. }
            | Self::NoteUpdated { business_id, .. }
            | Self::NoteDeleted { business_id, .. }
            | Self::LaundryStatsUpdated { business_id, .. } => Some(business_id),
        }
    }
}
