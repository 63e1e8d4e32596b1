//! Message templates
//!
//! Template names are part of the provider contract; body rendering is
//! a fallback for providers that take raw text.

use rust_decimal::Decimal;
use serde_json::{Value, json};

/// Templated customer message tied to a note lifecycle moment
#[derive(Debug, Clone, PartialEq)]
pub enum NoteTemplate {
    /// Sent on note creation
    NoteCreated {
        business_name: String,
        folio: String,
        total: Decimal,
    },
    /// Sent when the fulfillment axis reaches `listo_para_entregar`
    ReadyForPickup {
        business_name: String,
        folio: String,
        paid: Decimal,
        pending: Decimal,
    },
    /// Sent when the note is paid off and handed over
    PickupConfirmation {
        business_name: String,
        folio: String,
    },
}

impl NoteTemplate {
    /// Provider-side template identifier
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoteCreated { .. } => "note_created",
            Self::ReadyForPickup { .. } => "ready_for_pickup",
            Self::PickupConfirmation { .. } => "pickup_confirmation",
        }
    }

    /// Template parameters as sent to the provider
    pub fn params(&self) -> Value {
        match self {
            Self::NoteCreated { business_name, folio, total } => json!({
                "business": business_name,
                "folio": folio,
                "total": total.to_string(),
            }),
            Self::ReadyForPickup { business_name, folio, paid, pending } => json!({
                "business": business_name,
                "folio": folio,
                "paid": paid.to_string(),
                "pending": pending.to_string(),
            }),
            Self::PickupConfirmation { business_name, folio } => json!({
                "business": business_name,
                "folio": folio,
            }),
        }
    }

    /// Plain-text rendering
    pub fn render(&self) -> String {
        match self {
            Self::NoteCreated { business_name, folio, total } => format!(
                "{business_name}: recibimos tu nota {folio}. Total: ${total}."
            ),
            Self::ReadyForPickup { business_name, folio, paid, pending } => format!(
                "{business_name}: tu nota {folio} está lista para entregar. \
                 Abonado: ${paid}. Pendiente: ${pending}."
            ),
            Self::PickupConfirmation { business_name, folio } => format!(
                "{business_name}: tu nota {folio} fue entregada. ¡Gracias!"
            ),
        }
    }
}
