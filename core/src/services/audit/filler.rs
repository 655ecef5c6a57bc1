//! Pre-insert and pre-update hooks for audit columns

use chrono::NaiveDateTime;

use hse_shared::serialization;

use crate::domain::entities::Auditable;

use super::actor::{ActorProvider, SystemActor};

/// Stamps creation and update metadata onto records
///
/// The persistence layer calls [`insert_fill`](Self::insert_fill) before
/// an insert and [`update_fill`](Self::update_fill) before an update.
/// Timestamps are wall-clock times in the service zone.
#[derive(Debug, Clone, Default)]
pub struct AuditFieldFiller<A = SystemActor> {
    actor: A,
}

impl AuditFieldFiller<SystemActor> {
    pub fn new() -> Self {
        Self { actor: SystemActor }
    }
}

impl<A: ActorProvider> AuditFieldFiller<A> {
    pub fn with_actor(actor: A) -> Self {
        Self { actor }
    }

    /// Fills all four audit fields, keeping any the caller already set
    pub fn insert_fill<R: Auditable + ?Sized>(&self, record: &mut R) {
        self.insert_fill_at(record, serialization::now_naive());
    }

    pub fn insert_fill_at<R: Auditable + ?Sized>(&self, record: &mut R, now: NaiveDateTime) {
        let actor = self.actor.current_actor();
        let fields = record.audit_fields_mut();

        fields.created_at.get_or_insert(now);
        fields.updated_at.get_or_insert(now);
        if fields.created_by.is_none() {
            fields.created_by = Some(actor.clone());
        }
        if fields.updated_by.is_none() {
            fields.updated_by = Some(actor);
        }

        tracing::trace!(created_by = ?fields.created_by, "Audit fields filled for insert");
    }

    /// Stamps the update actor and time; creation fields are left alone
    pub fn update_fill<R: Auditable + ?Sized>(&self, record: &mut R) {
        self.update_fill_at(record, serialization::now_naive());
    }

    pub fn update_fill_at<R: Auditable + ?Sized>(&self, record: &mut R, now: NaiveDateTime) {
        let actor = self.actor.current_actor();
        let fields = record.audit_fields_mut();

        fields.updated_at = Some(now);
        fields.updated_by = Some(actor);

        tracing::trace!(updated_by = ?fields.updated_by, "Audit fields filled for update");
    }
}
