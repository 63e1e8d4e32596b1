//! Business Repository
//!
//! Reads and field updates. Creation and deletion are transactional
//! multi-collection operations owned by the business lifecycle manager.

use super::{BaseRepository, RepoResult, bare_id, full_id};
use chrono::Utc;
use shared::models::{Business, BusinessUpdate, Subscription};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub(crate) const BUSINESS_TABLE: &str = "business";

#[derive(Clone)]
pub struct BusinessRepository {
    base: BaseRepository,
}

impl BusinessRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Business>> {
        let mut result = self
            .base
            .db()
            .query("SELECT *, type::string(id) AS id FROM ONLY type::thing($tb, $id)")
            .bind(("tb", BUSINESS_TABLE))
            .bind(("id", bare_id(BUSINESS_TABLE, id).to_string()))
            .await?;
        let business: Option<Business> = result.take(0)?;
        Ok(business)
    }

    pub async fn find_by_owner(&self, owner_id: &str) -> RepoResult<Vec<Business>> {
        let businesses: Vec<Business> = self
            .base
            .db()
            .query("SELECT *, type::string(id) AS id FROM business WHERE owner_id = $owner ORDER BY name")
            .bind(("owner", owner_id.to_string()))
            .await?
            .take(0)?;
        Ok(businesses)
    }

    /// Apply a partial update, returning the updated record
    pub async fn update(&self, id: &str, data: BusinessUpdate) -> RepoResult<Business> {
        let bare = bare_id(BUSINESS_TABLE, id).to_string();
        self.base
            .db()
            .query("UPDATE type::thing($tb, $id) MERGE $patch")
            .bind(("tb", BUSINESS_TABLE))
            .bind(("id", bare.clone()))
            .bind(("patch", Patch::from(data)))
            .await?
            .check()?;

        self.find_by_id(&bare)
            .await?
            .ok_or_else(|| super::RepoError::NotFound(format!("business {bare}")))
    }

    pub async fn set_subscription(
        &self,
        id: &str,
        subscription: Option<Subscription>,
    ) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE type::thing($tb, $id) SET subscription = $sub, updated_at = time::now()")
            .bind(("tb", BUSINESS_TABLE))
            .bind(("id", bare_id(BUSINESS_TABLE, id).to_string()))
            .bind(("sub", subscription))
            .await?
            .check()?;
        Ok(())
    }

    /// Full id form for cross-table references
    pub fn reference(id: &str) -> String {
        full_id(BUSINESS_TABLE, id)
    }

    #[cfg(test)]
    pub async fn create_for_tests(
        &self,
        owner_id: &str,
        name: &str,
        active: bool,
    ) -> RepoResult<Business> {
        let id = super::new_id();
        let now = Utc::now();
        let business = Business {
            id: None,
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            email: format!("{name}@example.com").to_lowercase(),
            phone: "5550000000".into(),
            address: "Calle 1".into(),
            hours: Default::default(),
            logo_url: None,
            active,
            subscription: None,
            service_ids: Vec::new(),
            branch_count: 0,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.base
            .db()
            .query("CREATE type::thing($tb, $id) CONTENT $data")
            .bind(("tb", BUSINESS_TABLE))
            .bind(("id", id.clone()))
            .bind(("data", business))
            .await?
            .check()?;
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| super::RepoError::Database("created business not readable".into()))
    }
}

/// Serializable MERGE patch, skipping unset fields
#[derive(serde::Serialize)]
struct Patch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hours: Option<std::collections::HashMap<String, shared::models::DayHours>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
    updated_at: chrono::DateTime<Utc>,
}

impl From<BusinessUpdate> for Patch {
    fn from(u: BusinessUpdate) -> Self {
        Self {
            name: u.name,
            email: u.email,
            phone: u.phone,
            address: u.address,
            hours: u.hours,
            logo_url: u.logo_url,
            active: u.active,
            updated_at: Utc::now(),
        }
    }
}
