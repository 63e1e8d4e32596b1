//! WhatsApp provider client

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use shared::{AppError, AppResult};

use super::{NotificationSender, NoteTemplate, NotifyError};

/// HTTP client for the WhatsApp message provider
pub struct WhatsAppSender {
    client: reqwest::Client,
    base_url: String,
}

impl WhatsAppSender {
    pub fn new(base_url: String, timeout_ms: u64) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("notification client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl NotificationSender for WhatsAppSender {
    async fn send(&self, to_phone: &str, template: &NoteTemplate) -> Result<(), NotifyError> {
        let url = format!("{}/messages", self.base_url);
        let body = json!({
            "to": to_phone,
            "template": template.name(),
            "params": template.params(),
            "text": template.render(),
        });

        debug!(to = %to_phone, template = template.name(), "sending notification");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected(format!("{status}: {detail}")));
        }
        Ok(())
    }
}
