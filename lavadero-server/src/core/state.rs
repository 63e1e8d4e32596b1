use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::events::EventBus;
use crate::notify::{NotificationSender, NullSender, WhatsAppSender};
use crate::tenancy::{BillingClient, HttpBillingClient, NullBillingClient};
use shared::AppError;

/// Server state - shared handles for all request handlers
///
/// Cloning is cheap: every field is either `Clone`-by-`Arc` or an
/// internally shared handle (the SurrealDB client clones shallowly).
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT credential verifier
    pub jwt: Arc<JwtService>,
    /// Real-time domain event bus
    pub events: EventBus,
    /// Outbound notification sender (WhatsApp templates)
    pub notifier: Arc<dyn NotificationSender>,
    /// External billing provider client
    pub billing: Arc<dyn BillingClient>,
}

impl ServerState {
    /// Initialize all services from configuration
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = crate::db::init(&config.work_dir).await?;

        let jwt = Arc::new(JwtService::new(config.jwt.clone()));
        let events = EventBus::new(1024);

        let notifier: Arc<dyn NotificationSender> = match &config.whatsapp_api_url {
            Some(url) => Arc::new(WhatsAppSender::new(url.clone(), config.outbound_timeout_ms)?),
            None => {
                tracing::warn!("WHATSAPP_API_URL not set, notifications are logged only");
                Arc::new(NullSender)
            }
        };

        let billing: Arc<dyn BillingClient> = match &config.billing_api_url {
            Some(url) => Arc::new(HttpBillingClient::new(url.clone(), config.outbound_timeout_ms)?),
            None => Arc::new(NullBillingClient),
        };

        tracing::info!(environment = %config.environment, "server state initialized");

        Ok(Self {
            config: config.clone(),
            db,
            jwt,
            events,
            notifier,
            billing,
        })
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt.clone()
    }
}
