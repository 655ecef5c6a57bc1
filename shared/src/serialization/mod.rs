//! JSON serialization policy
//!
//! One policy for HTTP bodies and cache entries so a cached object reads
//! back exactly like an API response:
//! - field names are snake_case (native field naming, enums renamed)
//! - null object members are omitted on output
//! - unknown input fields are ignored (the serde default; never use
//!   `deny_unknown_fields` on wire types)
//! - a bare value is accepted where a sequence is expected
//!   ([`one_or_many`])
//! - dates and times are text in three fixed formats at UTC+8
//!   ([`datetime`])

pub mod datetime;
pub mod sequence;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::SerializationError;

pub use sequence::one_or_many;

/// `yyyy-MM-dd HH:mm:ss`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// `yyyy-MM-dd`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// `HH:mm:ss`
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// Offset of the policy zone (GMT+8)
pub const UTC_OFFSET_SECONDS: i32 = 8 * 3600;

/// Policy time zone
pub fn zone() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Current wall-clock time in the policy zone
pub fn now_local() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&zone())
}

/// Current wall-clock time in the policy zone, without offset
pub fn now_naive() -> NaiveDateTime {
    now_local().naive_local()
}

/// Serialize to a JSON value with null object members removed
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, SerializationError> {
    let mut value = serde_json::to_value(value)?;
    prune_nulls(&mut value);
    Ok(value)
}

/// Compact JSON text, used for cache entries
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_json::to_string(&to_value(value)?)?)
}

/// Indented JSON text, used for HTTP bodies
pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_json::to_string_pretty(&to_value(value)?)?)
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec(&to_value(value)?)?)
}

pub fn to_vec_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec_pretty(&to_value(value)?)?)
}

pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T, SerializationError> {
    Ok(serde_json::from_str(text)?)
}

pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, SerializationError> {
    Ok(serde_json::from_value(value)?)
}

/// Remove null members from every object in `value`
///
/// Nulls inside arrays are positional and kept.
pub fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(prune_nulls),
        _ => {}
    }
}
