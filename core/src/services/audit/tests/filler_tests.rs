//! Tests for audit field filling

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::entities::{AuditFields, Auditable};
use crate::services::audit::{AuditFieldFiller, SYSTEM_ACTOR};

#[derive(Debug, Default)]
struct Inspection {
    title: String,
    audit: AuditFields,
}

impl Auditable for Inspection {
    fn audit_fields(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_fields_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}

fn at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 2)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap()
}

#[test]
fn test_insert_fills_all_fields() {
    let filler = AuditFieldFiller::new();
    let mut record = Inspection {
        title: "scaffold check".to_string(),
        ..Default::default()
    };

    filler.insert_fill_at(&mut record, at(9));

    let audit = record.audit_fields();
    assert_eq!(audit.created_by.as_deref(), Some(SYSTEM_ACTOR));
    assert_eq!(audit.updated_by.as_deref(), Some(SYSTEM_ACTOR));
    assert_eq!(audit.created_at, Some(at(9)));
    assert_eq!(audit.updated_at, Some(at(9)));
    assert_eq!(record.title, "scaffold check");
}

#[test]
fn test_insert_keeps_caller_values() {
    let filler = AuditFieldFiller::new();
    let mut record = Inspection::default();
    record.audit.created_by = Some("importer".to_string());
    record.audit.created_at = Some(at(1));

    filler.insert_fill_at(&mut record, at(9));

    assert_eq!(record.audit.created_by.as_deref(), Some("importer"));
    assert_eq!(record.audit.created_at, Some(at(1)));
    assert_eq!(record.audit.updated_by.as_deref(), Some(SYSTEM_ACTOR));
    assert_eq!(record.audit.updated_at, Some(at(9)));
}

#[test]
fn test_update_never_touches_creation_fields() {
    let filler = AuditFieldFiller::new();
    let mut record = Inspection::default();
    filler.insert_fill_at(&mut record, at(9));

    let editor = AuditFieldFiller::with_actor(|| "inspector-7".to_string());
    editor.update_fill_at(&mut record, at(11));

    assert_eq!(record.audit.created_by.as_deref(), Some(SYSTEM_ACTOR));
    assert_eq!(record.audit.created_at, Some(at(9)));
    assert_eq!(record.audit.updated_by.as_deref(), Some("inspector-7"));
    assert_eq!(record.audit.updated_at, Some(at(11)));
}

#[test]
fn test_update_overwrites_previous_update() {
    let filler = AuditFieldFiller::new();
    let mut audit = AuditFields {
        updated_by: Some("someone".to_string()),
        updated_at: Some(at(3)),
        ..Default::default()
    };

    filler.update_fill_at(&mut audit, at(4));

    assert_eq!(audit.updated_by.as_deref(), Some(SYSTEM_ACTOR));
    assert_eq!(audit.updated_at, Some(at(4)));
    assert!(audit.created_at.is_none());
}

#[test]
fn test_wall_clock_fill_uses_service_zone() {
    let filler = AuditFieldFiller::new();
    let mut audit = AuditFields::default();

    let before = hse_shared::serialization::now_naive();
    filler.insert_fill(&mut audit);
    let after = hse_shared::serialization::now_naive();

    let stamped = audit.created_at.unwrap();
    assert!(stamped >= before && stamped <= after + Duration::seconds(1));
    assert_eq!(audit.created_at, audit.updated_at);
}
