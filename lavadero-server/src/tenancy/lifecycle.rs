//! Business lifecycle manager
//!
//! Creation and deletion are multi-collection transactions: the
//! business record, the owner's back-references, and (on delete) the
//! whole catalog and note set move together or not at all. Owner
//! checks run inside the transaction via `THROW`, so a concurrent
//! owner mutation cannot slip between check and write.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::{info, warn};

use crate::auth::CurrentUser;
use crate::auth::guards::valid_business_id;
use crate::db::repository::{BusinessRepository, UserRepository, bare_id, full_id, new_id};
use crate::events::{DomainEvent, EventBus};
use shared::models::{Business, BusinessCreate, BusinessUpdate};
use shared::{AppError, AppResult, ErrorCode};

use super::BillingClient;
use std::sync::Arc;

/// Name length bounds for a business
const NAME_MIN: usize = 3;
const NAME_MAX: usize = 50;

#[derive(Clone)]
pub struct BusinessLifecycle {
    db: Surreal<Db>,
    businesses: BusinessRepository,
    events: EventBus,
    billing: Arc<dyn BillingClient>,
}

impl BusinessLifecycle {
    pub fn new(db: Surreal<Db>, events: EventBus, billing: Arc<dyn BillingClient>) -> Self {
        Self {
            businesses: BusinessRepository::new(db.clone()),
            db,
            events,
            billing,
        }
    }

    /// Create a business and attach it to its owner, atomically
    ///
    /// Inside one transaction: verify the owner exists and is not a
    /// guest, create the business as `active`, append it to the
    /// owner's business list, make it the owner's default business,
    /// and complete the owner's onboarding step.
    pub async fn create_business(
        &self,
        owner_id: &str,
        attrs: BusinessCreate,
    ) -> AppResult<Business> {
        validate_attrs(&attrs)?;

        let owner_full = UserRepository::reference(owner_id);
        let owner_bare = bare_id("user", &owner_full).to_string();
        let business_id = new_id();
        let business_full = full_id("business", &business_id);

        let now = chrono::Utc::now();
        let business = Business {
            id: None,
            owner_id: owner_full.clone(),
            name: attrs.name.trim().to_string(),
            email: attrs.email.trim().to_lowercase(),
            phone: attrs.phone.trim().to_string(),
            address: attrs.address.trim().to_string(),
            hours: attrs.hours.unwrap_or_default(),
            logo_url: attrs.logo_url,
            active: true,
            subscription: None,
            service_ids: Vec::new(),
            branch_count: 0,
            created_at: Some(now),
            updated_at: Some(now),
        };

        let result = self
            .db
            .query(
                "BEGIN TRANSACTION;
                 LET $owner = (SELECT * FROM ONLY type::thing('user', $oid));
                 IF $owner == NONE { THROW 'owner_not_found' };
                 IF $owner.is_guest { THROW 'guest_cannot_own' };
                 CREATE type::thing('business', $bid) CONTENT $data;
                 UPDATE type::thing('user', $oid) SET
                     business_ids += $bfull,
                     default_business = $bfull,
                     onboarding_step = 'completed',
                     updated_at = time::now();
                 COMMIT TRANSACTION;",
            )
            .bind(("oid", owner_bare))
            .bind(("bid", business_id.clone()))
            .bind(("bfull", business_full.clone()))
            .bind(("data", business))
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .check();

        if let Err(e) = result {
            return Err(map_throw(e));
        }

        let created = self
            .businesses
            .find_by_id(&business_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::transaction("created business not readable"))?;

        info!(business = %business_full, owner = %owner_full, "business created");
        self.events.emit(DomainEvent::BusinessCreated {
            id: business_full,
            owner_id: owner_full,
        });
        Ok(created)
    }

    /// Update the mutable fields of a business
    pub async fn update_business(
        &self,
        user: &CurrentUser,
        raw_id: &str,
        update: BusinessUpdate,
    ) -> AppResult<Business> {
        let business = self.owned_business(user, raw_id).await?;
        let bare = valid_business_id(raw_id)?;

        if let Some(name) = &update.name {
            let trimmed = name.trim();
            let chars = trimmed.chars().count();
            if chars < NAME_MIN || chars > NAME_MAX {
                return Err(AppError::validation(format!(
                    "name must be {NAME_MIN}-{NAME_MAX} characters"
                )));
            }
        }
        if let Some(hours) = &update.hours {
            validate_hours(hours)?;
        }

        let updated = self
            .businesses
            .update(&bare, update)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        self.events.emit(DomainEvent::BusinessUpdated {
            id: business.id.clone().unwrap_or_default(),
        });
        Ok(updated)
    }

    /// Delete a business and everything scoped under it, atomically
    ///
    /// Refused while the business retains active sub-locations. An
    /// active external subscription is cancelled first, best effort:
    /// failure is logged and the deletion proceeds. The cascade then
    /// removes catalog entries, notes, the business record, and the
    /// owner's back-references in one transaction: a failure at any
    /// statement rolls all of them back, so a half-deleted business
    /// is never observable.
    pub async fn delete_business(&self, user: &CurrentUser, raw_id: &str) -> AppResult<()> {
        let business = self.owned_business(user, raw_id).await?;
        let business_full = business
            .id
            .clone()
            .ok_or_else(|| AppError::internal("business record without id"))?;
        let business_bare = bare_id("business", &business_full).to_string();

        if business.branch_count > 0 {
            return Err(AppError::new(ErrorCode::BusinessHasBranches)
                .with_detail("branch_count", business.branch_count));
        }

        if let Some(subscription) = business.subscription.as_ref().filter(|s| s.is_active()) {
            if let Some(external_ref) = &subscription.external_ref {
                if let Err(e) = self.billing.cancel_subscription(external_ref).await {
                    warn!(
                        business = %business_full,
                        error = %e,
                        "subscription cancellation failed, deleting anyway"
                    );
                }
            }
        }

        let owner_bare = bare_id("user", &business.owner_id).to_string();
        self.db
            .query(
                "BEGIN TRANSACTION;
                 DELETE service WHERE business_id = $bfull;
                 DELETE note WHERE business_id = $bfull;
                 DELETE type::thing('business', $bid);
                 UPDATE type::thing('user', $oid) SET
                     business_ids -= $bfull,
                     default_business = IF default_business == $bfull { NONE } ELSE { default_business },
                     updated_at = time::now();
                 COMMIT TRANSACTION;",
            )
            .bind(("bfull", business_full.clone()))
            .bind(("bid", business_bare))
            .bind(("oid", owner_bare))
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .check()
            .map_err(|e| AppError::transaction(e.to_string()))?;

        info!(business = %business_full, "business deleted");
        self.events.emit(DomainEvent::BusinessDeleted {
            id: business_full,
            owner_id: business.owner_id,
        });
        Ok(())
    }

    /// Ownership check that also accepts inactive businesses
    ///
    /// Lifecycle operations must work on a deactivated business
    /// (deleting one is the common case), so this is deliberately
    /// looser than the request-path access guard.
    async fn owned_business(&self, user: &CurrentUser, raw_id: &str) -> AppResult<Business> {
        let bare = valid_business_id(raw_id)?;
        let business = self
            .businesses
            .find_by_id(&bare)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::new(ErrorCode::BusinessNotFound))?;

        if business.owner_id != user.id && !user.is_admin() {
            crate::security_log!(
                "WARN",
                "business lifecycle access denied",
                principal = user.id,
                business = bare
            );
            return Err(AppError::unauthorized());
        }
        Ok(business)
    }
}

fn map_throw(e: surrealdb::Error) -> AppError {
    let text = e.to_string();
    if text.contains("owner_not_found") {
        AppError::new(ErrorCode::OwnerNotFound)
    } else if text.contains("guest_cannot_own") {
        AppError::new(ErrorCode::GuestCannotOwn)
    } else {
        AppError::transaction(text)
    }
}

fn validate_attrs(attrs: &BusinessCreate) -> AppResult<()> {
    let name = attrs.name.trim();
    let name_chars = name.chars().count();
    if name_chars < NAME_MIN || name_chars > NAME_MAX {
        return Err(AppError::validation(format!(
            "name must be {NAME_MIN}-{NAME_MAX} characters"
        )));
    }
    if !attrs.email.contains('@') {
        return Err(AppError::validation("email is malformed"));
    }
    let phone = attrs.phone.trim();
    if phone.len() < 7 || !phone.chars().all(|c| c.is_ascii_digit() || c == '+') {
        return Err(AppError::validation("phone is malformed"));
    }
    if attrs.address.trim().is_empty() {
        return Err(AppError::validation("address is required"));
    }
    if let Some(hours) = &attrs.hours {
        validate_hours(hours)?;
    }
    Ok(())
}

fn validate_hours(
    hours: &std::collections::HashMap<String, shared::models::DayHours>,
) -> AppResult<()> {
    for (day, entry) in hours {
        let valid_day = matches!(day.parse::<u8>(), Ok(d) if d <= 6);
        if !valid_day {
            return Err(AppError::new(ErrorCode::InvalidHours).with_detail("day", day.as_str()));
        }
        if !entry.closed {
            let well_formed = [&entry.open, &entry.close]
                .iter()
                .all(|t| t.as_deref().is_some_and(valid_time));
            if !well_formed {
                return Err(
                    AppError::new(ErrorCode::InvalidHours).with_detail("day", day.as_str())
                );
            }
        }
    }
    Ok(())
}

/// "HH:MM" with HH 00-23 and MM 00-59
fn valid_time(t: &str) -> bool {
    let Some((h, m)) = t.split_once(':') else {
        return false;
    };
    h.len() == 2
        && m.len() == 2
        && matches!(h.parse::<u8>(), Ok(h) if h <= 23)
        && matches!(m.parse::<u8>(), Ok(m) if m <= 59)
}
