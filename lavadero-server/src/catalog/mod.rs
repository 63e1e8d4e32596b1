//! Catalog Model
//!
//! Owns every mutation of a business's service catalog, including the
//! denormalized `service_ids` list on the business record (§ shared
//! resource policy: no other component touches that list).

pub mod normalize;

pub use normalize::{FieldError, capitalize_words, normalize_service};

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{BusinessRepository, ServiceRepository};
use crate::events::{DomainEvent, EventBus};
use shared::models::{Business, Service, ServiceInput, ServiceUpdate};
use shared::{AppError, AppResult, ErrorCode};

/// How a bulk upload treats invalid rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Invalid rows are reported and skipped; valid rows are created
    Partial,
    /// Any invalid row rejects the whole batch before any write
    Atomic,
}

/// A rejected bulk row with its field errors
#[derive(Debug, Clone, Serialize)]
pub struct RejectedRow {
    pub index: usize,
    pub errors: Vec<FieldError>,
}

/// Bulk upload result
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub created: Vec<Service>,
    pub rejected: Vec<RejectedRow>,
}

/// Catalog manager - validated catalog mutations for one business
#[derive(Clone)]
pub struct CatalogManager {
    services: ServiceRepository,
    events: EventBus,
}

impl CatalogManager {
    pub fn new(db: Surreal<Db>, events: EventBus) -> Self {
        Self {
            services: ServiceRepository::new(db),
            events,
        }
    }

    /// Create one entry; any validation error aborts
    pub async fn create_service(
        &self,
        business: &Business,
        input: &ServiceInput,
    ) -> AppResult<Service> {
        let business_ref = business_ref(business)?;
        let normalized = normalize_service(&business_ref, input).map_err(field_errors_to_app)?;

        self.reject_duplicate_name(&business_ref, &normalized.name)
            .await?;

        let created = self
            .services
            .create(normalized)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        self.events.emit(DomainEvent::ServiceCreated {
            id: created.id.clone().unwrap_or_default(),
            business_id: business_ref,
        });
        Ok(created)
    }

    /// Bulk create with an explicit invalid-row policy
    pub async fn create_bulk(
        &self,
        business: &Business,
        inputs: &[ServiceInput],
        mode: BatchMode,
    ) -> AppResult<BatchOutcome> {
        let business_ref = business_ref(business)?;

        // Validate every row up front; duplicates are checked against the
        // stored catalog and against earlier rows of this same batch.
        let mut normalized: Vec<(usize, Service)> = Vec::new();
        let mut rejected: Vec<RejectedRow> = Vec::new();
        let mut seen_names: Vec<String> = Vec::new();

        for (index, input) in inputs.iter().enumerate() {
            match normalize_service(&business_ref, input) {
                Ok(service) => {
                    let lower = service.name.to_lowercase();
                    let dup_in_batch = seen_names.contains(&lower);
                    let dup_stored = self
                        .services
                        .find_by_name(&business_ref, &service.name)
                        .await
                        .map_err(|e| AppError::database(e.to_string()))?
                        .is_some();
                    if dup_in_batch || dup_stored {
                        rejected.push(RejectedRow {
                            index,
                            errors: vec![FieldError {
                                field: "name".into(),
                                code: ErrorCode::DuplicateServiceName,
                                message: format!("service '{}' already exists", service.name),
                            }],
                        });
                    } else {
                        seen_names.push(lower);
                        normalized.push((index, service));
                    }
                }
                Err(errors) => rejected.push(RejectedRow { index, errors }),
            }
        }

        if mode == BatchMode::Atomic && !rejected.is_empty() {
            return Err(
                AppError::with_message(ErrorCode::ValidationFailed, "batch contains invalid rows")
                    .with_detail("rejected", serde_json::to_value(&rejected).unwrap_or_default()),
            );
        }

        let mut created = Vec::with_capacity(normalized.len());
        for (_, service) in normalized {
            let stored = self
                .services
                .create(service)
                .await
                .map_err(|e| AppError::database(e.to_string()))?;
            self.events.emit(DomainEvent::ServiceCreated {
                id: stored.id.clone().unwrap_or_default(),
                business_id: business_ref.clone(),
            });
            created.push(stored);
        }

        Ok(BatchOutcome { created, rejected })
    }

    /// Edit an entry, re-running full validation on the merged shape
    pub async fn update_service(
        &self,
        business: &Business,
        service_id: &str,
        update: &ServiceUpdate,
    ) -> AppResult<Service> {
        let business_ref = business_ref(business)?;
        let existing = self.owned_service(&business_ref, service_id).await?;

        let merged = ServiceInput {
            name: update.name.clone().unwrap_or_else(|| existing.name.clone()),
            kind: existing.kind,
            price: update.price.or(existing.price),
            unit: update.unit.clone().or_else(|| existing.unit.clone()),
            variants: match &update.variants {
                Some(v) => Some(v.clone()),
                None => Some(
                    existing
                        .variants
                        .iter()
                        .map(|v| shared::models::VariantInput {
                            id: Some(v.id.clone()),
                            name: v.name.clone(),
                            price: v.price,
                            unit: v.unit.clone(),
                        })
                        .collect(),
                ),
            },
            available_days: update.available_days.clone().or_else(|| {
                Some(existing.available_days.iter().map(|d| *d as i64).collect())
            }),
        };

        let mut normalized = normalize_service(&business_ref, &merged).map_err(field_errors_to_app)?;
        normalized.active = update.active.unwrap_or(existing.active);

        if normalized.name.to_lowercase() != existing.name.to_lowercase() {
            self.reject_duplicate_name(&business_ref, &normalized.name)
                .await?;
        }

        let updated = self
            .services
            .update(service_id, normalized)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        self.events.emit(DomainEvent::ServiceUpdated {
            id: updated.id.clone().unwrap_or_default(),
            business_id: business_ref,
        });
        Ok(updated)
    }

    /// Delete an entry, detaching it from the business catalog list
    pub async fn delete_service(&self, business: &Business, service_id: &str) -> AppResult<()> {
        let business_ref = business_ref(business)?;
        self.owned_service(&business_ref, service_id).await?;

        self.services
            .delete(service_id, &business_ref)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        self.events.emit(DomainEvent::ServiceDeleted {
            id: crate::db::repository::ServiceRepository::reference(service_id),
            business_id: business_ref,
        });
        Ok(())
    }

    pub async fn list_services(&self, business: &Business) -> AppResult<Vec<Service>> {
        let business_ref = business_ref(business)?;
        self.services
            .find_by_business(&business_ref)
            .await
            .map_err(|e| AppError::database(e.to_string()))
    }

    async fn owned_service(&self, business_ref: &str, service_id: &str) -> AppResult<Service> {
        self.services
            .find_by_id(service_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .filter(|s| s.business_id == business_ref)
            .ok_or_else(|| AppError::new(ErrorCode::ServiceNotFound))
    }

    async fn reject_duplicate_name(&self, business_ref: &str, name: &str) -> AppResult<()> {
        let duplicate = self
            .services
            .find_by_name(business_ref, name)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if duplicate.is_some() {
            return Err(
                AppError::new(ErrorCode::DuplicateServiceName).with_detail("name", name)
            );
        }
        Ok(())
    }
}

fn business_ref(business: &Business) -> AppResult<String> {
    business
        .id
        .clone()
        .map(|id| BusinessRepository::reference(&id))
        .ok_or_else(|| AppError::internal("business record without id"))
}

fn field_errors_to_app(errors: Vec<FieldError>) -> AppError {
    let code = errors.first().map(|e| e.code).unwrap_or(ErrorCode::ValidationFailed);
    AppError::with_message(code, "service validation failed")
        .with_detail("fields", serde_json::to_value(&errors).unwrap_or_default())
}
