//! JWT credential verification
//!
//! The platform delegates credential *issuance* to an external identity
//! service; this module only validates incoming tokens and extracts the
//! principal claims.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity providers the gate accepts credentials from
pub const SUPPORTED_PROVIDERS: &[&str] = &["local", "google"];

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (at least 32 bytes)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    /// Expected issuer
    pub issuer: String,
    /// Expected audience
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(s) if s.len() >= 32 => s,
            Ok(_) | Err(_) => {
                #[cfg(debug_assertions)]
                {
                    tracing::warn!("JWT_SECRET missing or too short, generating ephemeral key");
                    generate_printable_secret()
                }
                #[cfg(not(debug_assertions))]
                {
                    panic!("FATAL: JWT_SECRET must be set to at least 32 bytes in production");
                }
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "lavadero".to_string()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "lavadero-clients".to_string()),
        }
    }
}

impl JwtConfig {
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            secret: "test-secret-test-secret-test-secret-00".into(),
            expiration_minutes: 60,
            issuer: "lavadero".into(),
            audience: "lavadero-clients".into(),
        }
    }
}

/// Claims carried in a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal ID (subject)
    pub sub: String,
    /// Role name: customer | owner | admin
    pub role: String,
    /// Whether the principal's contact is verified
    #[serde(default)]
    pub verified: bool,
    /// Identity provider that issued the credential
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Default business of the principal, if any
    pub default_business: Option<String>,
    /// Token type
    pub token_type: String,
    /// Expiry timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

fn default_provider() -> String {
    "local".to_string()
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    ExpiredToken,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("unsupported identity provider: {0}")]
    UnsupportedProvider(String),

    #[error("token generation failed: {0}")]
    GenerationFailed(String),
}

/// Generate a printable random secret (development fallback)
pub fn generate_printable_secret() -> String {
    let allowed =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789".as_bytes();
    let rng = SystemRandom::new();
    let mut key = String::with_capacity(64);
    for _ in 0..64 {
        let mut byte = [0u8; 1];
        rng.fill(&mut byte).expect("system rng");
        key.push(allowed[byte[0] as usize % allowed.len()] as char);
    }
    key
}

/// JWT verification service
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Extract the raw token from an `Authorization: Bearer <token>` header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ").filter(|t| !t.is_empty())
    }

    /// Issue a token for a principal (used by tests and internal tooling;
    /// production issuance lives in the external identity service)
    pub fn generate_token(
        &self,
        principal_id: &str,
        role: &str,
        verified: bool,
        provider: &str,
        default_business: Option<String>,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: principal_id.to_string(),
            role: role.to_string(),
            verified,
            provider: provider.to_string(),
            default_business,
            token_type: "access".to_string(),
            exp: (now + Duration::minutes(self.config.expiration_minutes)).timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate a token and return its claims
    ///
    /// Rejects unknown identity providers even when the signature is
    /// valid, so a misconfigured upstream cannot mint usable tokens.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        if !SUPPORTED_PROVIDERS.contains(&data.claims.provider.as_str()) {
            return Err(JwtError::UnsupportedProvider(data.claims.provider));
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new(JwtConfig::for_tests())
    }

    #[test]
    fn test_generate_and_validate() {
        let svc = service();
        let token = svc
            .generate_token("user:u1", "owner", true, "local", None)
            .unwrap();
        let claims = svc.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "user:u1");
        assert_eq!(claims.role, "owner");
        assert!(claims.verified);
    }

    #[test]
    fn test_bad_signature_rejected() {
        let svc = service();
        let other = JwtService::new(JwtConfig {
            secret: "another-secret-another-secret-another!".into(),
            ..JwtConfig::for_tests()
        });
        let token = other
            .generate_token("user:u1", "owner", true, "local", None)
            .unwrap();
        assert!(matches!(
            svc.validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn test_unsupported_provider_rejected() {
        let svc = service();
        let token = svc
            .generate_token("user:u1", "owner", true, "facebook", None)
            .unwrap();
        assert!(matches!(
            svc.validate_token(&token),
            Err(JwtError::UnsupportedProvider(p)) if p == "facebook"
        ));
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header("Bearer "), None);
    }
}
