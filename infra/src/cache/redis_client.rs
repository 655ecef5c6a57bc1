//! Redis cache client implementation
//!
//! Multiplexed async connection with bounded connect time, exponential
//! backoff on transient failures, and the string operations the JSON cache
//! is built on.

use redis::{
    aio::MultiplexedConnection, AsyncCommands, Client, IntoConnectionInfo, RedisError,
    RedisResult,
};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use hse_shared::CacheConfig;

use crate::InfrastructureError;

/// Cap for the exponential backoff between attempts
const MAX_RETRY_DELAY_MS: u64 = 5000;

type RedisFuture<T> = Pin<Box<dyn Future<Output = RedisResult<T>> + Send>>;

/// Redis cache client with retry logic
///
/// Cloning is cheap; clones share the multiplexed connection.
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
    config: CacheConfig,
    max_retries: u32,
    retry_delay_ms: u64,
}

impl RedisClient {
    /// Create a new Redis client with three attempts and a 100ms base delay
    ///
    /// # Example
    /// ```no_run
    /// use hse_infra::cache::{CacheConfig, RedisClient};
    ///
    /// async fn create_client() -> Result<RedisClient, hse_infra::InfrastructureError> {
    ///     let config = CacheConfig::new("redis://localhost:6379").with_prefix("hse");
    ///     RedisClient::new(config).await
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Self::new_with_retry_config(config, 3, 100).await
    }

    /// Create a new Redis client with custom retry configuration
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    /// * `max_retries` - Maximum number of attempts per operation
    /// * `retry_delay_ms` - Base delay between attempts in milliseconds
    pub async fn new_with_retry_config(
        config: CacheConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!(
            "Creating Redis client with URL: {} (db {})",
            mask_url(&config.url),
            config.database
        );

        let mut connection_info = config.url.as_str().into_connection_info().map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;
        if config.database != 0 {
            connection_info.redis.db = i64::from(config.database);
        }

        let client = Client::open(connection_info).map_err(|e| {
            error!("Failed to open Redis client: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::create_connection_with_retry(
            client,
            Duration::from_secs(config.connection_timeout),
            max_retries,
            retry_delay_ms,
        )
        .await?;

        info!("Redis client created successfully");

        Ok(Self {
            connection,
            config,
            max_retries,
            retry_delay_ms,
        })
    }

    async fn create_connection_with_retry(
        client: Client,
        connect_timeout: Duration,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            let result = match timeout(connect_timeout, client.get_multiplexed_async_connection()).await {
                Ok(result) => result,
                Err(_) => Err(RedisError::from(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "connection timed out",
                ))),
            };

            match result {
                Ok(connection) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Err(e) if attempts < max_retries => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(MAX_RETRY_DELAY_MS);
                }
                Err(e) => {
                    error!("Failed to connect to Redis after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Set a value with expiration time in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);

        self.execute_with_retry(|mut conn| {
            let key = key.to_string();
            let value = value.to_string();
            Box::pin(async move { conn.set_ex::<_, _, ()>(key, value, expiry_seconds).await })
        })
        .await
        .map_err(|e| {
            error!("Failed to set key '{}': {}", key, e);
            InfrastructureError::Cache(e)
        })
    }

    /// Get a value; `None` when the key is absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);

        let value = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                Box::pin(async move { conn.get::<_, Option<String>>(key).await })
            })
            .await
            .map_err(|e| {
                error!("Failed to get key '{}': {}", key, e);
                InfrastructureError::Cache(e)
            })?;

        if value.is_none() {
            debug!("Key '{}' not found", key);
        }
        Ok(value)
    }

    /// Delete a key; true if it existed
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", key);

        let deleted = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                Box::pin(async move { conn.del::<_, u32>(key).await })
            })
            .await
            .map_err(|e| {
                error!("Failed to delete key '{}': {}", key, e);
                InfrastructureError::Cache(e)
            })?;

        Ok(deleted > 0)
    }

    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        self.execute_with_retry(|mut conn| {
            let key = key.to_string();
            Box::pin(async move { conn.exists::<_, bool>(key).await })
        })
        .await
        .map_err(|e| {
            error!("Failed to check key '{}' existence: {}", key, e);
            InfrastructureError::Cache(e)
        })
    }

    /// Remaining TTL in seconds; `None` when the key is missing or has no expiry
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        let ttl = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                Box::pin(async move { conn.ttl::<_, i64>(key).await })
            })
            .await
            .map_err(|e| {
                error!("Failed to get TTL for key '{}': {}", key, e);
                InfrastructureError::Cache(e)
            })?;

        Ok((ttl >= 0).then_some(ttl))
    }

    /// PING the server
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let response = self
            .execute_with_retry(|mut conn| {
                Box::pin(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            })
            .await
            .map_err(|e| {
                error!("Redis health check failed: {}", e);
                InfrastructureError::Cache(e)
            })?;

        if response != "PONG" {
            warn!("Redis health check returned unexpected response: {}", response);
            return Ok(false);
        }
        Ok(true)
    }

    async fn execute_with_retry<F, T>(&self, operation: F) -> RedisResult<T>
    where
        F: Fn(MultiplexedConnection) -> RedisFuture<T>,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay_ms;

        loop {
            attempts += 1;

            match operation(self.connection.clone()).await {
                Ok(result) => return Ok(result),
                Err(e) if attempts < self.max_retries && is_retriable_error(&e) => {
                    warn!(
                        "Redis operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, self.max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(MAX_RETRY_DELAY_MS);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Whether a failure is transient and worth another attempt
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Hide credentials in a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(proto_end), Some(at_pos)) if at_pos > proto_end => {
            format!("{}****{}", &url[..proto_end + 3], &url[at_pos..])
        }
        _ => url.to_string(),
    }
}
