//! Laundry note (ticket) model
//!
//! A note carries two independent advance-only statuses: the payment
//! axis and the fulfillment axis. The transition rules live in the
//! server's note state machine; this module only defines the vocabulary
//! and the stored shape.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment axis: `pendiente → pagado → entregado` (terminal)
///
/// `Entregado` means fully paid *and handed over* — reaching it also
/// drives the fulfillment axis to its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pendiente,
    Pagado,
    Entregado,
}

impl PaymentStatus {
    /// The single legal successor, if any
    pub fn next(&self) -> Option<PaymentStatus> {
        match self {
            Self::Pendiente => Some(Self::Pagado),
            Self::Pagado => Some(Self::Entregado),
            Self::Entregado => None,
        }
    }
}

/// Fulfillment axis: `sucia → lavado → listo_para_entregar → entregado`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    #[default]
    Sucia,
    Lavado,
    ListoParaEntregar,
    Entregado,
}

impl FulfillmentStatus {
    /// The single legal successor, if any
    pub fn next(&self) -> Option<FulfillmentStatus> {
        match self {
            Self::Sucia => Some(Self::Lavado),
            Self::Lavado => Some(Self::ListoParaEntregar),
            Self::ListoParaEntregar => Some(Self::Entregado),
            Self::Entregado => None,
        }
    }
}

/// Partial payment record, append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Abono {
    pub amount: Decimal,
    pub method: String,
    pub at: DateTime<Utc>,
}

/// Incoming abono payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbonoInput {
    pub amount: Decimal,
    pub method: String,
}

/// One priced line of a note, snapshotted at creation
///
/// Unit prices are captured from the catalog at creation time so later
/// catalog edits never change historical notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionLine {
    pub service_id: String,
    pub service_name: String,
    pub variant_id: Option<String>,
    pub variant_name: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// One requested item of a note-creation selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionItem {
    pub service_id: String,
    /// Required for variant services, absent for flat ones
    pub variant_id: Option<String>,
    pub quantity: u32,
}

/// Laundry note entity — one customer order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub business_id: String,
    pub customer_name: String,
    /// Human folio code, generated when not supplied
    pub folio: String,
    pub date: DateTime<Utc>,
    pub observations: Option<String>,
    pub lines: Vec<SelectionLine>,
    /// Softener surcharge requested at creation
    #[serde(default)]
    pub suavitel: bool,
    pub total: Decimal,
    #[serde(default)]
    pub abonos: Vec<Abono>,
    pub payment_status: PaymentStatus,
    pub fulfillment_status: FulfillmentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    /// Contact phone for WhatsApp notifications
    pub phone: Option<String>,
    /// Last notification delivery failure, recorded but never fatal
    pub whatsapp_error: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Sum of all partial payments
    pub fn paid_amount(&self) -> Decimal {
        self.abonos.iter().map(|a| a.amount).sum()
    }

    /// Amount still owed (never negative)
    pub fn pending_amount(&self) -> Decimal {
        (self.total - self.paid_amount()).max(Decimal::ZERO)
    }
}

/// Create note payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteCreate {
    pub customer_name: String,
    pub folio: Option<String>,
    pub observations: Option<String>,
    pub selection: Vec<SelectionItem>,
    #[serde(default)]
    pub suavitel: bool,
    #[serde(default)]
    pub initial_abonos: Vec<AbonoInput>,
    pub phone: Option<String>,
}
