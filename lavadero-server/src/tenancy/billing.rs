//! External billing provider client
//!
//! Subscription cancellation is best effort: a failure here is logged
//! against the deletion but never aborts it.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use shared::{AppError, AppResult};

/// Billing cancellation failure
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    #[error("billing request failed: {0}")]
    Request(String),
    #[error("billing provider rejected the cancellation: {0}")]
    Rejected(String),
}

/// Subscription management at the external billing provider
#[async_trait]
pub trait BillingClient: Send + Sync {
    /// Cancel the subscription identified by the provider's own reference
    async fn cancel_subscription(&self, external_ref: &str) -> Result<(), BillingError>;
}

/// Client used when no billing provider is configured
pub struct NullBillingClient;

#[async_trait]
impl BillingClient for NullBillingClient {
    async fn cancel_subscription(&self, external_ref: &str) -> Result<(), BillingError> {
        debug!(%external_ref, "billing cancellation suppressed (no provider)");
        Ok(())
    }
}

/// HTTP client for the billing provider
pub struct HttpBillingClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBillingClient {
    pub fn new(base_url: String, timeout_ms: u64) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("billing client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BillingClient for HttpBillingClient {
    async fn cancel_subscription(&self, external_ref: &str) -> Result<(), BillingError> {
        let url = format!("{}/subscriptions/{external_ref}/cancel", self.base_url);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| BillingError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(BillingError::Rejected(format!("{status}: {detail}")));
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Records cancellations and optionally fails them
    #[derive(Default)]
    pub struct MockBillingClient {
        pub canceled: Mutex<Vec<String>>,
        pub fail_with: Mutex<Option<String>>,
    }

    impl MockBillingClient {
        pub fn fail_all(&self, reason: &str) {
            *self.fail_with.lock().unwrap() = Some(reason.to_string());
        }

        pub fn canceled_refs(&self) -> Vec<String> {
            self.canceled.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BillingClient for MockBillingClient {
        async fn cancel_subscription(&self, external_ref: &str) -> Result<(), BillingError> {
            if let Some(reason) = self.fail_with.lock().unwrap().clone() {
                return Err(BillingError::Rejected(reason));
            }
            self.canceled.lock().unwrap().push(external_ref.to_string());
            Ok(())
        }
    }
}
