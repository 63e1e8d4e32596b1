//! Outbound customer notifications
//!
//! Fire-and-forget from the domain's perspective: a failed send is
//! recorded on the affected note, never propagated to the caller of
//! the triggering operation.

mod templates;
mod whatsapp;

pub use templates::NoteTemplate;
pub use whatsapp::WhatsAppSender;

use async_trait::async_trait;
use tracing::info;

/// Notification delivery failure
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification request failed: {0}")]
    Request(String),
    #[error("notification provider rejected the message: {0}")]
    Rejected(String),
}

/// Templated message delivery to a customer phone
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, to_phone: &str, template: &NoteTemplate) -> Result<(), NotifyError>;
}

/// Sender used when no provider is configured; logs and succeeds
pub struct NullSender;

#[async_trait]
impl NotificationSender for NullSender {
    async fn send(&self, to_phone: &str, template: &NoteTemplate) -> Result<(), NotifyError> {
        info!(to = %to_phone, template = template.name(), "notification suppressed (no provider)");
        Ok(())
    }
}
