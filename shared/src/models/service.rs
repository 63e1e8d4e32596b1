//! Catalog entry (service) model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing shape of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Single unit price
    Flat,
    /// Price per size variant
    Variant,
}

/// One size variant of a variant-priced service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceVariant {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub unit: Option<String>,
}

/// Catalog entry — one sellable unit within a business
///
/// Invariant (enforced by normalization): exactly one of `price` /
/// `variants` is populated, matching `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub business_id: String,
    /// Unique per business, case-normalized, 3-50 chars
    pub name: String,
    pub kind: ServiceKind,
    /// Flat unit price (flat kind only)
    pub price: Option<Decimal>,
    /// Unit of measure for flat entries ("kg", "pieza", ...)
    pub unit: Option<String>,
    /// Non-empty for variant kind, empty for flat
    #[serde(default)]
    pub variants: Vec<ServiceVariant>,
    /// Weekdays the service is offered (0-6); empty means every day
    #[serde(default)]
    pub available_days: Vec<u8>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Incoming variant payload; id is generated when absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantInput {
    pub id: Option<String>,
    pub name: String,
    pub price: Decimal,
    pub unit: Option<String>,
}

/// Create service payload (single or bulk row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    pub kind: ServiceKind,
    pub price: Option<Decimal>,
    pub unit: Option<String>,
    pub variants: Option<Vec<VariantInput>>,
    pub available_days: Option<Vec<i64>>,
}

/// Update service payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub unit: Option<String>,
    pub variants: Option<Vec<VariantInput>>,
    pub available_days: Option<Vec<i64>>,
    pub active: Option<bool>,
}

impl Service {
    /// Look up a variant by id
    pub fn variant(&self, variant_id: &str) -> Option<&ServiceVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}
