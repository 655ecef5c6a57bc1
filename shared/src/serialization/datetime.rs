//! Textual date/time fields
//!
//! Use with `#[serde(with = "hse_shared::serialization::datetime")]`, or
//! the `option` submodule for optional fields. Zoned values are written in
//! the policy offset; naive values are written as-is.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

use super::{zone, DATE_FORMAT, DATE_TIME_FORMAT, TIME_FORMAT};

/// Types with a fixed textual representation under the policy
pub trait PolicyFormat: Sized {
    fn format_policy(&self) -> String;
    fn parse_policy(text: &str) -> Result<Self, String>;
}

impl PolicyFormat for NaiveDateTime {
    fn format_policy(&self) -> String {
        self.format(DATE_TIME_FORMAT).to_string()
    }

    fn parse_policy(text: &str) -> Result<Self, String> {
        NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
            .map_err(|e| format!("invalid date-time '{}': {}", text, e))
    }
}

impl PolicyFormat for NaiveDate {
    fn format_policy(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }

    fn parse_policy(text: &str) -> Result<Self, String> {
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|e| format!("invalid date '{}': {}", text, e))
    }
}

impl PolicyFormat for NaiveTime {
    fn format_policy(&self) -> String {
        self.format(TIME_FORMAT).to_string()
    }

    fn parse_policy(text: &str) -> Result<Self, String> {
        NaiveTime::parse_from_str(text, TIME_FORMAT)
            .map_err(|e| format!("invalid time '{}': {}", text, e))
    }
}

impl PolicyFormat for DateTime<FixedOffset> {
    fn format_policy(&self) -> String {
        self.with_timezone(&zone()).naive_local().format_policy()
    }

    fn parse_policy(text: &str) -> Result<Self, String> {
        let naive = NaiveDateTime::parse_policy(text)?;
        zone()
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| format!("ambiguous local time '{}'", text))
    }
}

impl PolicyFormat for DateTime<Utc> {
    fn format_policy(&self) -> String {
        self.with_timezone(&zone()).format_policy()
    }

    fn parse_policy(text: &str) -> Result<Self, String> {
        DateTime::<FixedOffset>::parse_policy(text).map(|local| local.with_timezone(&Utc))
    }
}

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: PolicyFormat,
    S: Serializer,
{
    serializer.serialize_str(&value.format_policy())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: PolicyFormat,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    T::parse_policy(&text).map_err(de::Error::custom)
}

/// Optional date/time fields
///
/// Pair with `default` and `skip_serializing_if = "Option::is_none"`.
pub mod option {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: PolicyFormat,
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&value.format_policy()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: PolicyFormat,
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| T::parse_policy(&text).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "crate::serialization::datetime")]
        created_at: DateTime<Utc>,
        #[serde(with = "crate::serialization::datetime")]
        birth_date: NaiveDate,
        #[serde(with = "crate::serialization::datetime")]
        opens_at: NaiveTime,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::serialization::datetime::option"
        )]
        updated_at: Option<NaiveDateTime>,
    }

    fn sample() -> Stamped {
        Stamped {
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 2, 30, 0).unwrap(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
            opens_at: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_writes_fixed_text_formats_in_policy_zone() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["created_at"], "2024-01-15 10:30:00");
        assert_eq!(json["birth_date"], "1990-05-20");
        assert_eq!(json["opens_at"], "09:00:00");
        assert!(json.get("updated_at").is_none());
    }

    #[test]
    fn test_reads_policy_text_back_to_same_instant() {
        let json = r#"{
            "created_at": "2024-01-15 10:30:00",
            "birth_date": "1990-05-20",
            "opens_at": "09:00:00",
            "updated_at": "2024-02-01 08:00:00"
        }"#;
        let parsed: Stamped = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.created_at, sample().created_at);
        assert_eq!(
            parsed.updated_at,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(8, 0, 0)
        );
    }

    #[test]
    fn test_rejects_other_formats() {
        let json = r#"{
            "created_at": "2024-01-15T10:30:00Z",
            "birth_date": "1990-05-20",
            "opens_at": "09:00:00"
        }"#;
        assert!(serde_json::from_str::<Stamped>(json).is_err());
    }

    #[test]
    fn test_fixed_offset_values_are_normalized() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let value = tokyo.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(value.format_policy(), "2024-03-01 11:00:00");
    }
}
