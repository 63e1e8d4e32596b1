//! Note Repository
//!
//! Status transitions execute as guarded (compare-and-swap) updates:
//! the `WHERE` clause re-checks the stored status — and for payment
//! moves the abono count — inside the same write, so two concurrent
//! transitions can never both succeed past the guard. A CAS miss
//! returns `Ok(None)` and the caller decides between conflict and
//! illegal-transition reporting.

use super::{BaseRepository, RepoError, RepoResult, bare_id, new_id};
use chrono::{DateTime, Utc};
use shared::models::{Abono, FulfillmentStatus, Note, PaymentStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub(crate) const NOTE_TABLE: &str = "note";

#[derive(Clone)]
pub struct NoteRepository {
    base: BaseRepository,
}

impl NoteRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Note>> {
        let mut result = self
            .base
            .db()
            .query("SELECT *, type::string(id) AS id FROM ONLY type::thing($tb, $id)")
            .bind(("tb", NOTE_TABLE))
            .bind(("id", bare_id(NOTE_TABLE, id).to_string()))
            .await?;
        let note: Option<Note> = result.take(0)?;
        Ok(note)
    }

    pub async fn find_by_business(&self, business_id: &str) -> RepoResult<Vec<Note>> {
        let notes: Vec<Note> = self
            .base
            .db()
            .query("SELECT *, type::string(id) AS id FROM note WHERE business_id = $bid ORDER BY date DESC")
            .bind(("bid", business_id.to_string()))
            .await?
            .take(0)?;
        Ok(notes)
    }

    pub async fn create(&self, mut note: Note) -> RepoResult<Note> {
        let id = new_id();
        let now = Utc::now();
        note.id = None;
        note.created_at = Some(now);
        note.updated_at = Some(now);

        self.base
            .db()
            .query("CREATE type::thing($tb, $id) CONTENT $data")
            .bind(("tb", NOTE_TABLE))
            .bind(("id", id.clone()))
            .bind(("data", note))
            .await?
            .check()?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepoError::Database("created note not readable".into()))
    }

    /// Guarded move to `pagado`
    ///
    /// Appends the optional new abono and stamps `paid_at` in the same
    /// write. Guards: stored payment status must still be `pendiente`
    /// and the abono list must still have `expected_abonos` entries
    /// (the caller's sufficiency check was computed against that list).
    pub async fn mark_pagado(
        &self,
        id: &str,
        new_abono: Option<Abono>,
        expected_abonos: usize,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<Note>> {
        let appended: Vec<Abono> = new_abono.into_iter().collect();
        let updated: Vec<String> = self
            .base
            .db()
            .query(
                "UPDATE type::thing($tb, $id) SET
                     payment_status = $new,
                     abonos = array::concat(abonos, $appended),
                     paid_at = paid_at ?? $now,
                     updated_at = $now
                 WHERE payment_status = $expected AND array::len(abonos) = $count
                 RETURN VALUE type::string(id)",
            )
            .bind(("tb", NOTE_TABLE))
            .bind(("id", bare_id(NOTE_TABLE, id).to_string()))
            .bind(("new", PaymentStatus::Pagado))
            .bind(("appended", appended))
            .bind(("now", now))
            .bind(("expected", PaymentStatus::Pendiente))
            .bind(("count", expected_abonos as i64))
            .await?
            .take(0)?;

        match updated.first() {
            Some(full) => self.find_by_id(full).await,
            None => Ok(None),
        }
    }

    /// Guarded move to payment `entregado`
    ///
    /// Requires the stored status to be exactly `pagado`; stamps
    /// `delivered_at` once and drives the fulfillment axis to its
    /// terminal state in the same write.
    pub async fn mark_entregado(&self, id: &str, now: DateTime<Utc>) -> RepoResult<Option<Note>> {
        let updated: Vec<String> = self
            .base
            .db()
            .query(
                "UPDATE type::thing($tb, $id) SET
                     payment_status = $new,
                     fulfillment_status = $fulfilled,
                     delivered_at = delivered_at ?? $now,
                     updated_at = $now
                 WHERE payment_status = $expected
                 RETURN VALUE type::string(id)",
            )
            .bind(("tb", NOTE_TABLE))
            .bind(("id", bare_id(NOTE_TABLE, id).to_string()))
            .bind(("new", PaymentStatus::Entregado))
            .bind(("fulfilled", FulfillmentStatus::Entregado))
            .bind(("now", now))
            .bind(("expected", PaymentStatus::Pagado))
            .await?
            .take(0)?;

        match updated.first() {
            Some(full) => self.find_by_id(full).await,
            None => Ok(None),
        }
    }

    /// Guarded fulfillment advance
    pub async fn advance_fulfillment(
        &self,
        id: &str,
        expected: FulfillmentStatus,
        new: FulfillmentStatus,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<Note>> {
        let updated: Vec<String> = self
            .base
            .db()
            .query(
                "UPDATE type::thing($tb, $id) SET
                     fulfillment_status = $new,
                     updated_at = $now
                 WHERE fulfillment_status = $expected
                 RETURN VALUE type::string(id)",
            )
            .bind(("tb", NOTE_TABLE))
            .bind(("id", bare_id(NOTE_TABLE, id).to_string()))
            .bind(("new", new))
            .bind(("now", now))
            .bind(("expected", expected))
            .await?
            .take(0)?;

        match updated.first() {
            Some(full) => self.find_by_id(full).await,
            None => Ok(None),
        }
    }

    /// Append an abono while the note is not yet delivered
    pub async fn push_abono(&self, id: &str, abono: Abono) -> RepoResult<Option<Note>> {
        let updated: Vec<String> = self
            .base
            .db()
            .query(
                "UPDATE type::thing($tb, $id) SET
                     abonos += $abono,
                     updated_at = time::now()
                 WHERE payment_status != $terminal
                 RETURN VALUE type::string(id)",
            )
            .bind(("tb", NOTE_TABLE))
            .bind(("id", bare_id(NOTE_TABLE, id).to_string()))
            .bind(("abono", abono))
            .bind(("terminal", PaymentStatus::Entregado))
            .await?
            .take(0)?;

        match updated.first() {
            Some(full) => self.find_by_id(full).await,
            None => Ok(None),
        }
    }

    /// Record (or clear) the last notification delivery failure
    pub async fn set_whatsapp_error(&self, id: &str, error: Option<String>) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE type::thing($tb, $id) SET whatsapp_error = $err, updated_at = time::now()")
            .bind(("tb", NOTE_TABLE))
            .bind(("id", bare_id(NOTE_TABLE, id).to_string()))
            .bind(("err", error))
            .await?
            .check()?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let existing = self.find_by_id(id).await?;
        if existing.is_none() {
            return Ok(false);
        }
        self.base
            .db()
            .query("DELETE type::thing($tb, $id)")
            .bind(("tb", NOTE_TABLE))
            .bind(("id", bare_id(NOTE_TABLE, id).to_string()))
            .await?
            .check()?;
        Ok(true)
    }

    /// Cascade path used only by business deletion
    pub async fn delete_by_business(&self, business_id: &str) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE note WHERE business_id = $bid")
            .bind(("bid", business_id.to_string()))
            .await?
            .check()?;
        Ok(())
    }
}
