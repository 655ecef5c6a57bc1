//! Typed cache entries in the shared JSON policy

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use hse_shared::serialization;

use super::RedisClient;
use crate::InfrastructureError;

/// JSON value cache over [`RedisClient`]
///
/// Keys get the configured prefix; values are compact policy JSON (null
/// members dropped, dates as `yyyy-MM-dd HH:mm:ss` at UTC+8).
#[derive(Clone)]
pub struct JsonCache {
    client: RedisClient,
}

impl JsonCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RedisClient {
        &self.client
    }

    /// Full Redis key for `key`
    pub fn key(&self, key: &str) -> String {
        self.client.config().make_key(key)
    }

    /// Store `value` for the configured default TTL
    pub async fn set_json<T>(&self, key: &str, value: &T) -> Result<(), InfrastructureError>
    where
        T: Serialize + ?Sized,
    {
        let ttl = self.client.config().default_ttl;
        self.set_json_with_ttl(key, value, ttl).await
    }

    pub async fn set_json_with_ttl<T>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: u64,
    ) -> Result<(), InfrastructureError>
    where
        T: Serialize + ?Sized,
    {
        let payload = encode(value)?;
        self.client
            .set_with_expiry(&self.key(key), &payload, ttl_seconds)
            .await
    }

    /// Read a value back; `None` when absent
    ///
    /// An entry that no longer decodes as `T` is reported as an error and
    /// left in place.
    pub async fn get_json<T>(&self, key: &str) -> Result<Option<T>, InfrastructureError>
    where
        T: DeserializeOwned,
    {
        let full_key = self.key(key);
        match self.client.get(&full_key).await? {
            Some(payload) => decode(&payload).map(Some).map_err(|e| {
                warn!("Cache entry '{}' does not decode: {}", full_key, e);
                e
            }),
            None => {
                debug!("Cache miss for '{}'", full_key);
                Ok(None)
            }
        }
    }

    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        self.client.delete(&self.key(key)).await
    }

    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        self.client.exists(&self.key(key)).await
    }
}

/// Cache payload for `value`
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, InfrastructureError> {
    Ok(serialization::to_string(value)?)
}

/// Value stored in a cache payload
pub fn decode<T: DeserializeOwned>(payload: &str) -> Result<T, InfrastructureError> {
    Ok(serialization::from_str(payload)?)
}
