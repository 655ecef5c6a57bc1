//! # Infrastructure Layer
//!
//! Redis-backed cache for HSE services. Entries are written with the same
//! JSON policy as HTTP responses, so cached objects read back exactly like
//! API payloads.
//!
//! ## Features
//!
//! - `redis-cache`: Enable Redis caching support (default)

/// Cache module - Redis client and JSON entries
pub mod cache;

use hse_shared::SerializationError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Cache entry could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
