//! Ownership and scope guards
//!
//! Pure checks over the resolved principal and the target resource.
//! Each guard either returns the verified resource for downstream code
//! to trust, or a stable error code. Nothing here mutates state.

use chrono::Utc;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{BusinessRepository, UserRepository};
use shared::models::{Business, OnboardingStep, Role, User};
use shared::{AppError, AppResult, ErrorCode};

/// Maximum length of a raw business id
const MAX_ID_LEN: usize = 64;

/// Syntactic validation of a business id
///
/// Accepts a bare id or the `business:<id>` form and returns the bare id.
pub fn valid_business_id(raw: &str) -> AppResult<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::new(ErrorCode::MissingBusinessId));
    }
    let bare = raw.strip_prefix("business:").unwrap_or(raw);
    let ok = !bare.is_empty()
        && bare.len() <= MAX_ID_LEN
        && bare
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !ok {
        return Err(AppError::new(ErrorCode::InvalidBusinessId).with_detail("id", raw));
    }
    Ok(bare.to_string())
}

/// Business ownership check
///
/// Verifies the id, resolves the business, and requires the acting
/// principal to be its owner or a platform admin. The returned
/// [`Business`] is verified; downstream components may trust it
/// without re-checking.
pub async fn require_business_access(
    state: &ServerState,
    user: &CurrentUser,
    raw_id: &str,
) -> AppResult<Business> {
    let bare = valid_business_id(raw_id)?;

    let repo = BusinessRepository::new(state.db.clone());
    let business = repo
        .find_by_id(&bare)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::BusinessNotFound))?;

    if business.owner_id != user.id && !user.is_admin() {
        tracing::warn!(
            principal = %user.id,
            business = %bare,
            "business access denied"
        );
        return Err(AppError::unauthorized());
    }

    if !business.active {
        return Err(AppError::new(ErrorCode::BusinessInactive));
    }

    Ok(business)
}

/// Self-or-admin check for principal-scoped resources
pub fn require_self_or_admin(user: &CurrentUser, target_id: &str) -> AppResult<()> {
    if user.id == target_id || user.is_admin() {
        Ok(())
    } else {
        tracing::warn!(principal = %user.id, target = %target_id, "self-or-admin denied");
        Err(AppError::unauthorized())
    }
}

/// Guest resolution: must exist, be flagged as guest, and be unexpired
pub async fn require_guest(state: &ServerState, guest_id: &str) -> AppResult<User> {
    let repo = UserRepository::new(state.db.clone());
    let guest = repo
        .find_by_id(guest_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .filter(|u| u.is_guest)
        .ok_or_else(|| AppError::new(ErrorCode::GuestNotFound))?;

    match guest.guest_expires_at {
        Some(expiry) if expiry > Utc::now() => Ok(guest),
        _ => Err(AppError::new(ErrorCode::GuestExpired)),
    }
}

/// Onboarding gate for owner principals
///
/// Owners must have completed onboarding before touching
/// business-operational endpoints; other roles pass through.
pub async fn require_onboarded(state: &ServerState, user: &CurrentUser) -> AppResult<()> {
    if user.role != Role::Owner {
        return Ok(());
    }
    let repo = UserRepository::new(state.db.clone());
    let record = repo
        .find_by_id(&user.id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::invalid_credential("Unknown principal"))?;

    if record.onboarding_step == OnboardingStep::Completed {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::RegistrationIncomplete))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::test_support::test_state;
    use chrono::Duration;
    use shared::models::UserCreate;

    fn current(id: &str, role: Role) -> CurrentUser {
        CurrentUser {
            id: id.to_string(),
            role,
            verified: true,
            provider: "local".into(),
            default_business: None,
        }
    }

    #[test]
    fn test_business_id_syntax() {
        assert!(valid_business_id("").is_err());
        assert!(valid_business_id("  ").is_err());
        assert!(valid_business_id("has spaces").is_err());
        assert!(valid_business_id("business:").is_err());
        assert_eq!(valid_business_id("abc-123").unwrap(), "abc-123");
        assert_eq!(valid_business_id("business:abc").unwrap(), "abc");
    }

    #[test]
    fn test_self_or_admin() {
        let me = current("user:u1", Role::Customer);
        assert!(require_self_or_admin(&me, "user:u1").is_ok());
        assert!(require_self_or_admin(&me, "user:u2").is_err());
        let admin = current("user:root", Role::Admin);
        assert!(require_self_or_admin(&admin, "user:u2").is_ok());
    }

    #[tokio::test]
    async fn test_business_access_denied_for_stranger() {
        let t = test_state().await;
        let repo = BusinessRepository::new(t.state.db.clone());
        let business = repo
            .create_for_tests("user:owner1", "Burbujas", true)
            .await
            .unwrap();
        let id = business.id.unwrap();

        let stranger = current("user:intruder", Role::Owner);
        let err = require_business_access(&t.state, &stranger, &id)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let owner = current("user:owner1", Role::Owner);
        assert!(require_business_access(&t.state, &owner, &id).await.is_ok());

        let admin = current("user:root", Role::Admin);
        assert!(require_business_access(&t.state, &admin, &id).await.is_ok());
    }

    #[tokio::test]
    async fn test_inactive_business_rejected() {
        let t = test_state().await;
        let repo = BusinessRepository::new(t.state.db.clone());
        let business = repo
            .create_for_tests("user:owner1", "Cerrada", false)
            .await
            .unwrap();
        let owner = current("user:owner1", Role::Owner);
        let err = require_business_access(&t.state, &owner, &business.id.unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessInactive);
    }

    #[tokio::test]
    async fn test_missing_business() {
        let t = test_state().await;
        let owner = current("user:owner1", Role::Owner);
        let err = require_business_access(&t.state, &owner, "nope")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessNotFound);
    }

    #[tokio::test]
    async fn test_guest_checks() {
        let t = test_state().await;
        let users = UserRepository::new(t.state.db.clone());

        let fresh = users
            .create(UserCreate {
                name: "Guest".into(),
                email: "g@x".into(),
                role: None,
                is_guest: Some(true),
                guest_expires_at: Some(Utc::now() + Duration::hours(1)),
            })
            .await
            .unwrap();
        assert!(require_guest(&t.state, fresh.id.as_ref().unwrap()).await.is_ok());

        let stale = users
            .create(UserCreate {
                name: "Stale".into(),
                email: "s@x".into(),
                role: None,
                is_guest: Some(true),
                guest_expires_at: Some(Utc::now() - Duration::hours(1)),
            })
            .await
            .unwrap();
        let err = require_guest(&t.state, stale.id.as_ref().unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::GuestExpired);

        let err = require_guest(&t.state, "user:missing").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::GuestNotFound);
    }
}
