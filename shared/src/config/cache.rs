//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Default TTL for cache entries in seconds
    #[serde(default = "default_ttl")]
    pub default_ttl: u64,

    /// Prefix prepended to every key as `<prefix>:<key>`
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Redis database number (0-15)
    #[serde(default)]
    pub database: u8,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: default_connection_timeout(),
            default_ttl: default_ttl(),
            key_prefix: None,
            database: 0,
        }
    }
}

impl CacheConfig {
    /// Create from `REDIS_URL`, `REDIS_KEY_PREFIX` and `REDIS_DEFAULT_TTL`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("REDIS_URL").unwrap_or(defaults.url),
            key_prefix: std::env::var("REDIS_KEY_PREFIX").ok().filter(|p| !p.is_empty()),
            default_ttl: std::env::var("REDIS_DEFAULT_TTL")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.default_ttl),
            ..defaults
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Set the database number
    pub fn with_database(mut self, db: u8) -> Self {
        self.database = db.min(15);
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_ttl() -> u64 {
    3600 // 1 hour
}
