//! Audit columns carried by persisted records

use chrono::NaiveDateTime;
use hse_shared::serialization::datetime;
use serde::{Deserialize, Serialize};

/// Who created and last updated a record, and when
///
/// Timestamps are wall-clock times in the service zone and serialize as
/// `yyyy-MM-dd HH:mm:ss`. Absent values are omitted from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "datetime::option"
    )]
    pub created_at: Option<NaiveDateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "datetime::option"
    )]
    pub updated_at: Option<NaiveDateTime>,
}

/// Record exposing its audit columns to the filler
pub trait Auditable {
    fn audit_fields(&self) -> &AuditFields;

    fn audit_fields_mut(&mut self) -> &mut AuditFields;
}

impl Auditable for AuditFields {
    fn audit_fields(&self) -> &AuditFields {
        self
    }

    fn audit_fields_mut(&mut self) -> &mut AuditFields {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_serializes_policy_format_and_skips_absent() {
        let fields = AuditFields {
            created_by: Some("system".to_string()),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 9)
                .and_then(|d| d.and_hms_opt(14, 5, 0)),
            updated_by: None,
            updated_at: None,
        };

        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["created_by"], "system");
        assert_eq!(json["created_at"], "2024-03-09 14:05:00");
        assert!(json.get("updated_by").is_none());
        assert!(json.get("updated_at").is_none());
    }

    #[test]
    fn test_deserializes_missing_columns_as_none() {
        let fields: AuditFields =
            serde_json::from_str(r#"{"updated_at":"2024-03-09 14:05:00"}"#).unwrap();

        assert!(fields.created_by.is_none());
        assert!(fields.created_at.is_none());
        assert_eq!(
            fields.updated_at.map(|t| t.to_string()),
            Some("2024-03-09 14:05:00".to_string())
        );
    }
}
