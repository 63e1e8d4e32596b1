use crate::auth::JwtConfig;
use crate::pricing::PricingRules;

/// Server configuration
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/lavadero | Work directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | WHATSAPP_API_URL | (unset) | Notification provider endpoint; unset disables sending |
/// | BILLING_API_URL | (unset) | Billing provider endpoint; unset disables cancellation calls |
/// | OUTBOUND_TIMEOUT_MS | 5000 | Timeout for outbound collaborator calls |
///
/// JWT settings come from [`JwtConfig`], pricing rules from
/// [`PricingRules`] (both env-driven as well).
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the embedded database
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Running environment: development | staging | production
    pub environment: String,
    /// JWT verification configuration
    pub jwt: JwtConfig,
    /// Notification provider endpoint (None disables outbound sends)
    pub whatsapp_api_url: Option<String>,
    /// Billing provider endpoint (None disables subscription cancellation)
    pub billing_api_url: Option<String>,
    /// Timeout applied to every outbound collaborator call
    pub outbound_timeout_ms: u64,
    /// Versioned pricing rules (softener surcharge etc.)
    pub pricing: PricingRules,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/lavadero".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
            whatsapp_api_url: std::env::var("WHATSAPP_API_URL").ok(),
            billing_api_url: std::env::var("BILLING_API_URL").ok(),
            outbound_timeout_ms: std::env::var("OUTBOUND_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            pricing: PricingRules::from_env(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
