//! Cache module for Redis-based caching
//!
//! [`RedisClient`] wraps a multiplexed connection with retry logic;
//! [`JsonCache`] stores typed values on top of it.

pub mod json_cache;
pub mod redis_client;


pub use json_cache::JsonCache;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use hse_shared::CacheConfig;
