//! Authorization gate
//!
//! Resolves the acting principal from a bearer credential and checks
//! whether it may act on a given business, principal, or guest record.
//! All checks are side-effect-free except tracing.

pub mod extractor;
pub mod guards;
pub mod jwt;
pub mod middleware;

pub use guards::{
    require_business_access, require_guest, require_onboarded, require_self_or_admin,
};
pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;

use shared::models::Role;

/// The resolved principal attached to every authenticated request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub role: Role,
    pub verified: bool,
    /// Identity provider that issued the credential
    pub provider: String,
    pub default_business: Option<String>,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl TryFrom<Claims> for CurrentUser {
    type Error = String;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let role: Role = claims.role.parse()?;
        Ok(Self {
            id: claims.sub,
            role,
            verified: claims.verified,
            provider: claims.provider,
            default_business: claims.default_business,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_from_claims() {
        let claims = Claims {
            sub: "user:u1".into(),
            role: "owner".into(),
            verified: true,
            provider: "local".into(),
            default_business: Some("business:b1".into()),
            token_type: "access".into(),
            exp: 0,
            iat: 0,
            iss: "lavadero".into(),
            aud: "lavadero-clients".into(),
        };
        let user = CurrentUser::try_from(claims).unwrap();
        assert_eq!(user.role, Role::Owner);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let claims = Claims {
            sub: "user:u1".into(),
            role: "superuser".into(),
            verified: false,
            provider: "local".into(),
            default_business: None,
            token_type: "access".into(),
            exp: 0,
            iat: 0,
            iss: "lavadero".into(),
            aud: "lavadero-clients".into(),
        };
        assert!(CurrentUser::try_from(claims).is_err());
    }
}
