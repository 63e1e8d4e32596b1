//! Note state machine
//!
//! Owns every note mutation. Transitions are re-checked inside the
//! database write (see the note repository), so a caller-side check
//! passing never guarantees the write lands; a miss surfaces as a
//! conflict. Notifications are best effort: failures land in the
//! note's `whatsapp_error` field and never fail the operation.

use std::sync::Arc;

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::warn;

use crate::db::repository::{NoteRepository, ServiceRepository, new_id};
use crate::events::{DomainEvent, EventBus};
use crate::notify::{NotificationSender, NoteTemplate};
use crate::pricing::{PricingRules, price_selection};
use shared::models::{
    Abono, AbonoInput, Business, FulfillmentStatus, Note, NoteCreate, PaymentStatus,
};
use shared::{AppError, AppResult, ErrorCode};

use super::stats::compute_monthly;
use super::status;

#[derive(Clone)]
pub struct NoteMachine {
    notes: NoteRepository,
    services: ServiceRepository,
    events: EventBus,
    notifier: Arc<dyn NotificationSender>,
    rules: PricingRules,
}

impl NoteMachine {
    pub fn new(
        db: Surreal<Db>,
        events: EventBus,
        notifier: Arc<dyn NotificationSender>,
        rules: PricingRules,
    ) -> Self {
        Self {
            notes: NoteRepository::new(db.clone()),
            services: ServiceRepository::new(db),
            events,
            notifier,
            rules,
        }
    }

    pub fn from_state(state: &crate::core::ServerState) -> Self {
        Self::new(
            state.db.clone(),
            state.events.clone(),
            state.notifier.clone(),
            state.config.pricing.clone(),
        )
    }

    /// Create a note at `pendiente`/`sucia`
    ///
    /// The selection is priced against the business's current catalog
    /// and snapshotted onto the note. Initial abonos are validated but
    /// never auto-complete the payment axis.
    pub async fn create(&self, business: &Business, input: NoteCreate) -> AppResult<Note> {
        let business_id = business_id(business)?;

        for abono in &input.initial_abonos {
            status::check_abono(abono.amount, &abono.method)?;
        }

        let catalog = self
            .services
            .find_by_business(&business_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        let priced = price_selection(&catalog, &input.selection, input.suavitel, &self.rules)?;

        let now = Utc::now();
        let note = Note {
            id: None,
            business_id: business_id.clone(),
            customer_name: input.customer_name.trim().to_string(),
            folio: input.folio.unwrap_or_else(generate_folio),
            date: now,
            observations: input.observations,
            lines: priced.lines,
            suavitel: input.suavitel,
            total: priced.total,
            abonos: input
                .initial_abonos
                .into_iter()
                .map(|a| Abono { amount: a.amount, method: a.method, at: now })
                .collect(),
            payment_status: PaymentStatus::Pendiente,
            fulfillment_status: FulfillmentStatus::Sucia,
            paid_at: None,
            delivered_at: None,
            phone: input.phone,
            whatsapp_error: None,
            created_at: None,
            updated_at: None,
        };

        let mut created = self
            .notes
            .create(note)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        self.events.emit(DomainEvent::NoteCreated {
            id: created.id.clone().unwrap_or_default(),
            business_id: business_id.clone(),
        });
        self.refresh_stats(&business_id).await;

        let template = NoteTemplate::NoteCreated {
            business_name: business.name.clone(),
            folio: created.folio.clone(),
            total: created.total,
        };
        self.notify(&mut created, template).await;

        Ok(created)
    }

    /// Advance the payment axis
    ///
    /// Requesting the current status again is an idempotent no-op, so
    /// a repeated completion call never overwrites `paid_at`. Moving
    /// to `pagado` requires the abonos (plus the optional new one) to
    /// cover the total; the shortfall is reported otherwise. Moving to
    /// `entregado` requires the status to be exactly `pagado`, stamps
    /// `delivered_at` once, and carries the fulfillment axis to its
    /// terminal state.
    pub async fn request_payment_transition(
        &self,
        business: &Business,
        note_id: &str,
        requested: PaymentStatus,
        new_abono: Option<AbonoInput>,
    ) -> AppResult<Note> {
        let business_id = business_id(business)?;
        let note = self.scoped_note(&business_id, note_id).await?;

        if note.payment_status == requested {
            return Ok(note);
        }
        status::check_payment_advance(note.payment_status, requested)?;

        let updated = match requested {
            PaymentStatus::Pagado => {
                let now = Utc::now();
                let appended = match new_abono {
                    Some(input) => {
                        status::check_abono(input.amount, &input.method)?;
                        Some(Abono { amount: input.amount, method: input.method, at: now })
                    }
                    None => None,
                };

                let covered = note.paid_amount()
                    + appended.as_ref().map(|a| a.amount).unwrap_or_default();
                if covered < note.total {
                    let shortfall = note.total - covered;
                    return Err(AppError::new(ErrorCode::InsufficientAbonos)
                        .with_detail("shortfall", shortfall.to_string())
                        .with_detail("total", note.total.to_string()));
                }

                self.notes
                    .mark_pagado(note_id, appended, note.abonos.len(), now)
                    .await
                    .map_err(|e| AppError::database(e.to_string()))?
                    .ok_or_else(|| AppError::new(ErrorCode::NoteConflict))?
            }
            PaymentStatus::Entregado => {
                if new_abono.is_some() {
                    return Err(AppError::invalid_request(
                        "abonos cannot accompany a delivery transition",
                    ));
                }
                debug_assert!(status::fulfillment_delivery_allowed(note.payment_status));

                let mut delivered = self
                    .notes
                    .mark_entregado(note_id, Utc::now())
                    .await
                    .map_err(|e| AppError::database(e.to_string()))?
                    .ok_or_else(|| AppError::new(ErrorCode::NoteConflict))?;

                let template = NoteTemplate::PickupConfirmation {
                    business_name: business.name.clone(),
                    folio: delivered.folio.clone(),
                };
                self.notify(&mut delivered, template).await;
                delivered
            }
            PaymentStatus::Pendiente => unreachable!("no transition enters pendiente"),
        };

        self.events.emit(DomainEvent::NoteUpdated {
            id: updated.id.clone().unwrap_or_default(),
            business_id: business_id.clone(),
        });
        self.refresh_stats(&business_id).await;
        Ok(updated)
    }

    /// Advance the fulfillment axis
    ///
    /// The terminal state is reachable only through the payment-side
    /// delivery transition; staff cannot mark a note delivered here.
    pub async fn request_fulfillment_transition(
        &self,
        business: &Business,
        note_id: &str,
        requested: FulfillmentStatus,
    ) -> AppResult<Note> {
        let business_id = business_id(business)?;
        let note = self.scoped_note(&business_id, note_id).await?;

        if requested == FulfillmentStatus::Entregado {
            return Err(AppError::invalid_transition(
                "delivery is recorded through the payment transition",
            ));
        }
        status::check_fulfillment_advance(note.fulfillment_status, requested)?;

        let mut updated = self
            .notes
            .advance_fulfillment(note_id, note.fulfillment_status, requested, Utc::now())
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::new(ErrorCode::NoteConflict))?;

        if requested == FulfillmentStatus::ListoParaEntregar {
            let template = NoteTemplate::ReadyForPickup {
                business_name: business.name.clone(),
                folio: updated.folio.clone(),
                paid: updated.paid_amount(),
                pending: updated.pending_amount(),
            };
            self.notify(&mut updated, template).await;
        }

        self.events.emit(DomainEvent::NoteUpdated {
            id: updated.id.clone().unwrap_or_default(),
            business_id: business_id.clone(),
        });
        self.refresh_stats(&business_id).await;
        Ok(updated)
    }

    /// Append a partial payment
    ///
    /// Always permitted while the note has not been delivered.
    pub async fn add_abono(
        &self,
        business: &Business,
        note_id: &str,
        input: AbonoInput,
    ) -> AppResult<Note> {
        let business_id = business_id(business)?;
        status::check_abono(input.amount, &input.method)?;
        let note = self.scoped_note(&business_id, note_id).await?;
        if note.payment_status == PaymentStatus::Entregado {
            return Err(AppError::new(ErrorCode::NoteAlreadyDelivered));
        }

        let abono = Abono {
            amount: input.amount,
            method: input.method,
            at: Utc::now(),
        };
        let updated = self
            .notes
            .push_abono(note_id, abono)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::new(ErrorCode::NoteAlreadyDelivered))?;

        self.events.emit(DomainEvent::NoteUpdated {
            id: updated.id.clone().unwrap_or_default(),
            business_id: business_id.clone(),
        });
        self.refresh_stats(&business_id).await;
        Ok(updated)
    }

    /// Administrative delete; also drops the note from the aggregates
    pub async fn delete(&self, business: &Business, note_id: &str) -> AppResult<()> {
        let business_id = business_id(business)?;
        let note = self.scoped_note(&business_id, note_id).await?;
        self.notes
            .delete(note_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        self.events.emit(DomainEvent::NoteDeleted {
            id: note.id.unwrap_or_default(),
            business_id: business_id.clone(),
        });
        self.refresh_stats(&business_id).await;
        Ok(())
    }

    pub async fn list(&self, business: &Business) -> AppResult<Vec<Note>> {
        let business_id = business_id(business)?;
        self.notes
            .find_by_business(&business_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))
    }

    pub async fn get(&self, business: &Business, note_id: &str) -> AppResult<Note> {
        let business_id = business_id(business)?;
        self.scoped_note(&business_id, note_id).await
    }

    /// Current monthly aggregates for the business
    pub async fn monthly_stats(&self, business: &Business) -> AppResult<Vec<super::MonthlyStat>> {
        let business_id = business_id(business)?;
        let notes = self
            .notes
            .find_by_business(&business_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok(compute_monthly(&notes))
    }

    /// Recompute aggregates and push them to subscribers, best effort
    async fn refresh_stats(&self, business_id: &str) {
        match self.notes.find_by_business(business_id).await {
            Ok(notes) => {
                self.events.emit(DomainEvent::LaundryStatsUpdated {
                    business_id: business_id.to_string(),
                    stats: compute_monthly(&notes),
                });
            }
            Err(e) => warn!(business = %business_id, error = %e, "stats recompute failed"),
        }
    }

    /// Send a notification if the note carries a phone
    ///
    /// A failure is recorded on the note and mirrored into the local
    /// copy; it never propagates.
    async fn notify(&self, note: &mut Note, template: NoteTemplate) {
        let Some(phone) = note.phone.clone() else {
            return;
        };
        let Some(id) = note.id.clone() else {
            return;
        };
        match self.notifier.send(&phone, &template).await {
            Ok(()) => {
                if note.whatsapp_error.is_some() {
                    note.whatsapp_error = None;
                    let _ = self.notes.set_whatsapp_error(&id, None).await;
                }
            }
            Err(e) => {
                let message = e.to_string();
                warn!(note = %id, error = %message, "notification failed");
                note.whatsapp_error = Some(message.clone());
                if let Err(e) = self.notes.set_whatsapp_error(&id, Some(message)).await {
                    warn!(note = %id, error = %e, "recording notification failure failed");
                }
            }
        }
    }

    async fn scoped_note(&self, business_id: &str, note_id: &str) -> AppResult<Note> {
        self.notes
            .find_by_id(note_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .filter(|n| n.business_id == business_id)
            .ok_or_else(|| AppError::new(ErrorCode::NoteNotFound))
    }
}

fn business_id(business: &Business) -> AppResult<String> {
    business
        .id
        .clone()
        .ok_or_else(|| AppError::internal("business record without id"))
}

/// Short human folio, e.g. `N-4F9A2C`
fn generate_folio() -> String {
    let id = new_id();
    format!("N-{}", id[..6].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::normalize_service;
    use crate::core::state::test_support::{TestState, test_state};
    use crate::db::repository::BusinessRepository;
    use rust_decimal::Decimal;
    use shared::models::{SelectionItem, ServiceInput, ServiceKind};

    fn dec(v: i64) -> Decimal {
        Decimal::new(v, 0)
    }

    async fn seed_flat(t: &TestState, business_id: &str, name: &str, price: i64) -> String {
        let service = normalize_service(
            business_id,
            &ServiceInput {
                name: name.into(),
                kind: ServiceKind::Flat,
                price: Some(dec(price)),
                unit: Some("kg".into()),
                variants: None,
                available_days: None,
            },
        )
        .unwrap();
        ServiceRepository::new(t.state.db.clone())
            .create(service)
            .await
            .unwrap()
            .id
            .unwrap()
    }

    async fn setup() -> (NoteMachine, Business, TestState) {
        let t = test_state().await;
        let business = BusinessRepository::new(t.state.db.clone())
            .create_for_tests("user:owner1", "Burbujas", true)
            .await
            .unwrap();
        let machine = NoteMachine::from_state(&t.state);
        (machine, business, t)
    }

    fn creation(service_id: &str, quantity: u32) -> NoteCreate {
        NoteCreate {
            customer_name: "Ana".into(),
            folio: None,
            observations: None,
            selection: vec![SelectionItem {
                service_id: service_id.to_string(),
                variant_id: None,
                quantity,
            }],
            suavitel: false,
            initial_abonos: vec![],
            phone: None,
        }
    }

    fn abono(amount: i64) -> AbonoInput {
        AbonoInput { amount: dec(amount), method: "efectivo".into() }
    }

    #[tokio::test]
    async fn test_create_snapshots_prices_and_generates_folio() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Ropa Por Kilo", 14).await;

        let note = machine.create(&business, creation(&service_id, 2)).await.unwrap();
        assert_eq!(note.total, dec(28));
        assert_eq!(note.payment_status, PaymentStatus::Pendiente);
        assert_eq!(note.fulfillment_status, FulfillmentStatus::Sucia);
        assert!(note.folio.starts_with("N-"));
        assert_eq!(note.lines[0].unit_price, dec(14));

        // A later catalog price change must not alter the stored note
        ServiceRepository::new(t.state.db.clone())
            .update(&service_id, {
                let mut s = normalize_service(
                    &bid,
                    &ServiceInput {
                        name: "Ropa Por Kilo".into(),
                        kind: ServiceKind::Flat,
                        price: Some(dec(99)),
                        unit: None,
                        variants: None,
                        available_days: None,
                    },
                )
                .unwrap();
                s.active = true;
                s
            })
            .await
            .unwrap();
        let reloaded = machine.get(&business, note.id.as_ref().unwrap()).await.unwrap();
        assert_eq!(reloaded.total, dec(28));
    }

    #[tokio::test]
    async fn test_pagado_requires_full_coverage() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Ropa Por Kilo", 100).await;

        let mut create = creation(&service_id, 1);
        create.initial_abonos = vec![abono(40)];
        let note = machine.create(&business, create).await.unwrap();
        let note_id = note.id.clone().unwrap();

        // 40 + 50 < 100: rejected with the shortfall
        let err = machine
            .request_payment_transition(&business, &note_id, PaymentStatus::Pagado, Some(abono(50)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientAbonos);
        let details = err.details.unwrap();
        assert_eq!(details["shortfall"], serde_json::json!("10"));

        let unchanged = machine.get(&business, &note_id).await.unwrap();
        assert_eq!(unchanged.payment_status, PaymentStatus::Pendiente);
        assert_eq!(unchanged.abonos.len(), 1);

        // 40 + 60 = 100: accepted, paid_at stamped
        let paid = machine
            .request_payment_transition(&business, &note_id, PaymentStatus::Pagado, Some(abono(60)))
            .await
            .unwrap();
        assert_eq!(paid.payment_status, PaymentStatus::Pagado);
        assert_eq!(paid.abonos.len(), 2);
        assert!(paid.paid_at.is_some());
    }

    #[tokio::test]
    async fn test_repeated_pagado_is_idempotent() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Tenis", 60).await;

        let mut create = creation(&service_id, 1);
        create.initial_abonos = vec![abono(60)];
        let note = machine.create(&business, create).await.unwrap();
        let note_id = note.id.clone().unwrap();

        let first = machine
            .request_payment_transition(&business, &note_id, PaymentStatus::Pagado, None)
            .await
            .unwrap();
        let stamped = first.paid_at.unwrap();

        let second = machine
            .request_payment_transition(&business, &note_id, PaymentStatus::Pagado, None)
            .await
            .unwrap();
        assert_eq!(second.paid_at, Some(stamped));
        assert_eq!(second.abonos.len(), 1);
    }

    #[tokio::test]
    async fn test_delivery_requires_pagado_and_closes_both_axes() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Tenis", 60).await;
        let note = machine.create(&business, creation(&service_id, 1)).await.unwrap();
        let note_id = note.id.clone().unwrap();

        // pendiente → entregado skips pagado
        let err = machine
            .request_payment_transition(&business, &note_id, PaymentStatus::Entregado, None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);

        machine
            .request_payment_transition(&business, &note_id, PaymentStatus::Pagado, Some(abono(60)))
            .await
            .unwrap();
        let delivered = machine
            .request_payment_transition(&business, &note_id, PaymentStatus::Entregado, None)
            .await
            .unwrap();
        assert_eq!(delivered.payment_status, PaymentStatus::Entregado);
        assert_eq!(delivered.fulfillment_status, FulfillmentStatus::Entregado);
        assert!(delivered.delivered_at.is_some());
    }

    #[tokio::test]
    async fn test_fulfillment_advances_stepwise_and_never_delivers() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Tenis", 60).await;
        let note = machine.create(&business, creation(&service_id, 1)).await.unwrap();
        let note_id = note.id.clone().unwrap();

        // Skipping lavado is rejected
        let err = machine
            .request_fulfillment_transition(
                &business,
                &note_id,
                FulfillmentStatus::ListoParaEntregar,
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);

        let washed = machine
            .request_fulfillment_transition(&business, &note_id, FulfillmentStatus::Lavado)
            .await
            .unwrap();
        assert_eq!(washed.fulfillment_status, FulfillmentStatus::Lavado);
        // Payment axis untouched
        assert_eq!(washed.payment_status, PaymentStatus::Pendiente);

        machine
            .request_fulfillment_transition(
                &business,
                &note_id,
                FulfillmentStatus::ListoParaEntregar,
            )
            .await
            .unwrap();

        // Direct delivery on the fulfillment axis is always refused
        let err = machine
            .request_fulfillment_transition(&business, &note_id, FulfillmentStatus::Entregado)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
    }

    #[tokio::test]
    async fn test_ready_notification_reports_amounts() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Tenis", 100).await;

        let mut create = creation(&service_id, 1);
        create.phone = Some("5512345678".into());
        create.initial_abonos = vec![abono(40)];
        let note = machine.create(&business, create).await.unwrap();
        let note_id = note.id.clone().unwrap();

        machine
            .request_fulfillment_transition(&business, &note_id, FulfillmentStatus::Lavado)
            .await
            .unwrap();
        machine
            .request_fulfillment_transition(
                &business,
                &note_id,
                FulfillmentStatus::ListoParaEntregar,
            )
            .await
            .unwrap();

        let sent = t.notifier.sent.lock().unwrap();
        let (_, ready) = sent
            .iter()
            .find(|(_, t)| t.name() == "ready_for_pickup")
            .expect("ready notification sent");
        match ready {
            NoteTemplate::ReadyForPickup { paid, pending, .. } => {
                assert_eq!(*paid, dec(40));
                assert_eq!(*pending, dec(60));
            }
            other => panic!("unexpected template {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_notification_failure_is_recorded_not_fatal() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Tenis", 60).await;
        t.notifier.fail_all("provider down");

        let mut create = creation(&service_id, 1);
        create.phone = Some("5512345678".into());
        let note = machine.create(&business, create).await.unwrap();
        assert!(note.whatsapp_error.as_deref().unwrap().contains("provider down"));

        let stored = machine.get(&business, note.id.as_ref().unwrap()).await.unwrap();
        assert!(stored.whatsapp_error.is_some());
    }

    #[tokio::test]
    async fn test_abono_append_and_delivered_freeze() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Tenis", 100).await;
        let note = machine.create(&business, creation(&service_id, 1)).await.unwrap();
        let note_id = note.id.clone().unwrap();

        let after = machine.add_abono(&business, &note_id, abono(30)).await.unwrap();
        assert_eq!(after.paid_amount(), dec(30));

        let err = machine.add_abono(&business, &note_id, abono(0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAbonoAmount);

        machine
            .request_payment_transition(&business, &note_id, PaymentStatus::Pagado, Some(abono(70)))
            .await
            .unwrap();
        machine
            .request_payment_transition(&business, &note_id, PaymentStatus::Entregado, None)
            .await
            .unwrap();

        let err = machine.add_abono(&business, &note_id, abono(10)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoteAlreadyDelivered);
    }

    #[tokio::test]
    async fn test_delete_removes_from_stats() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Tenis", 60).await;

        let mut create = creation(&service_id, 1);
        create.initial_abonos = vec![abono(60)];
        let note = machine.create(&business, create).await.unwrap();

        let before = machine.monthly_stats(&business).await.unwrap();
        assert_eq!(before[0].notes, 1);
        assert_eq!(before[0].revenue, dec(60));

        machine.delete(&business, note.id.as_ref().unwrap()).await.unwrap();
        let after = machine.monthly_stats(&business).await.unwrap();
        assert!(after.is_empty());
    }

    #[tokio::test]
    async fn test_note_scoped_to_business() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Tenis", 60).await;
        let note = machine.create(&business, creation(&service_id, 1)).await.unwrap();

        let other = BusinessRepository::new(t.state.db.clone())
            .create_for_tests("user:owner2", "Otra", true)
            .await
            .unwrap();
        let err = machine
            .get(&other, note.id.as_ref().unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoteNotFound);
    }

    #[tokio::test]
    async fn test_stats_event_emitted_on_create() {
        let (machine, business, t) = setup().await;
        let bid = business.id.clone().unwrap();
        let service_id = seed_flat(&t, &bid, "Tenis", 60).await;
        let mut rx = t.state.events.subscribe();

        machine.create(&business, creation(&service_id, 1)).await.unwrap();

        let mut names = Vec::new();
        while let Ok(event) = rx.try_recv() {
            names.push(event.name());
        }
        assert!(names.contains(&"noteCreated"));
        assert!(names.contains(&"laundryStatsUpdated"));
    }
}
