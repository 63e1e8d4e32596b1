//! Service Repository
//!
//! Catalog entries. Create and delete also maintain the owning
//! business's denormalized `service_ids` list inside the same
//! transaction, so the list and the table cannot diverge.

use super::{BaseRepository, RepoError, RepoResult, bare_id, full_id, new_id};
use chrono::Utc;
use shared::models::Service;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub(crate) const SERVICE_TABLE: &str = "service";

#[derive(Clone)]
pub struct ServiceRepository {
    base: BaseRepository,
}

impl ServiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Service>> {
        let mut result = self
            .base
            .db()
            .query("SELECT *, type::string(id) AS id FROM ONLY type::thing($tb, $id)")
            .bind(("tb", SERVICE_TABLE))
            .bind(("id", bare_id(SERVICE_TABLE, id).to_string()))
            .await?;
        let service: Option<Service> = result.take(0)?;
        Ok(service)
    }

    /// All active entries of a business's catalog
    pub async fn find_by_business(&self, business_id: &str) -> RepoResult<Vec<Service>> {
        let services: Vec<Service> = self
            .base
            .db()
            .query("SELECT *, type::string(id) AS id FROM service WHERE business_id = $bid ORDER BY name")
            .bind(("bid", business_id.to_string()))
            .await?
            .take(0)?;
        Ok(services)
    }

    /// Case-normalized name lookup for duplicate detection
    pub async fn find_by_name(&self, business_id: &str, name: &str) -> RepoResult<Option<Service>> {
        let services: Vec<Service> = self
            .base
            .db()
            .query("SELECT *, type::string(id) AS id FROM service WHERE business_id = $bid AND string::lowercase(name) = string::lowercase($name)")
            .bind(("bid", business_id.to_string()))
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        Ok(services.into_iter().next())
    }

    /// Create an entry and append its id to the business catalog list,
    /// atomically
    pub async fn create(&self, mut service: Service) -> RepoResult<Service> {
        let id = new_id();
        let business_ref = service.business_id.clone();
        let business_bare = bare_id(super::business::BUSINESS_TABLE, &business_ref).to_string();
        let now = Utc::now();
        service.id = None;
        service.created_at = Some(now);
        service.updated_at = Some(now);

        self.base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 CREATE type::thing('service', $id) CONTENT $data;
                 UPDATE type::thing('business', $bid) SET service_ids += $full, updated_at = time::now();
                 COMMIT TRANSACTION;",
            )
            .bind(("id", id.clone()))
            .bind(("data", service))
            .bind(("bid", business_bare))
            .bind(("full", full_id(SERVICE_TABLE, &id)))
            .await?
            .check()?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database("created service not readable".into()))
    }

    /// Replace the mutable fields of an entry
    pub async fn update(&self, id: &str, normalized: Service) -> RepoResult<Service> {
        let bare = bare_id(SERVICE_TABLE, id).to_string();
        self.base
            .db()
            .query(
                "UPDATE type::thing($tb, $id) SET
                     name = $name, kind = $kind, price = $price, unit = $unit,
                     variants = $variants, available_days = $days, active = $active,
                     updated_at = time::now()",
            )
            .bind(("tb", SERVICE_TABLE))
            .bind(("id", bare.clone()))
            .bind(("name", normalized.name))
            .bind(("kind", normalized.kind))
            .bind(("price", normalized.price))
            .bind(("unit", normalized.unit))
            .bind(("variants", normalized.variants))
            .bind(("days", normalized.available_days))
            .bind(("active", normalized.active))
            .await?
            .check()?;

        self.find_by_id(&bare)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("service {bare}")))
    }

    /// Delete an entry and remove it from the business catalog list,
    /// atomically
    pub async fn delete(&self, id: &str, business_id: &str) -> RepoResult<bool> {
        let bare = bare_id(SERVICE_TABLE, id).to_string();
        let existing = self.find_by_id(&bare).await?;
        if existing.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query(
                "BEGIN TRANSACTION;
                 DELETE type::thing('service', $id);
                 UPDATE type::thing('business', $bid) SET service_ids -= $full, updated_at = time::now();
                 COMMIT TRANSACTION;",
            )
            .bind(("id", bare.clone()))
            .bind(("bid", bare_id(super::business::BUSINESS_TABLE, business_id).to_string()))
            .bind(("full", full_id(SERVICE_TABLE, &bare)))
            .await?
            .check()?;
        Ok(true)
    }

    /// Full id form for cross-table references
    pub fn reference(id: &str) -> String {
        full_id(SERVICE_TABLE, id)
    }
}
