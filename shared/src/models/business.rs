//! Business (tenant) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opening hours for a single weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayHours {
    pub closed: bool,
    /// "HH:MM", present when not closed
    pub open: Option<String>,
    /// "HH:MM", present when not closed
    pub close: Option<String>,
}

/// External subscription status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    PastDue,
    Canceled,
}

/// Subscription state held against the external billing provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: String,
    pub status: SubscriptionStatus,
    /// Billing provider's subscription reference
    pub external_ref: Option<String>,
}

/// Business entity — one laundry business, the unit of data isolation
///
/// `service_ids` is the denormalized, ordered list of catalog entries.
/// It is mutated only by the catalog code path so it cannot diverge
/// from the service table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning principal; must reference an existing non-guest user
    pub owner_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Weekday ("0" = Sunday .. "6" = Saturday) to opening hours
    #[serde(default)]
    pub hours: HashMap<String, DayHours>,
    pub logo_url: Option<String>,
    pub active: bool,
    pub subscription: Option<Subscription>,
    /// Ordered catalog entry references (denormalized)
    #[serde(default)]
    pub service_ids: Vec<String>,
    /// Active sub-locations; deletion is refused while non-zero
    #[serde(default)]
    pub branch_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create business payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub hours: Option<HashMap<String, DayHours>>,
    pub logo_url: Option<String>,
}

/// Update business payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BusinessUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub hours: Option<HashMap<String, DayHours>>,
    pub logo_url: Option<String>,
    pub active: Option<bool>,
}

impl Subscription {
    /// Whether the subscription needs cancelling at the billing provider
    pub fn is_active(&self) -> bool {
        matches!(self.status, SubscriptionStatus::Active | SubscriptionStatus::PastDue)
    }
}
