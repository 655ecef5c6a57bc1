//! Shared conventions for HSE backend services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The message code catalog and response envelope
//! - Localized message resolution
//! - The JSON serialization policy shared by HTTP and cache

pub mod config;
pub mod errors;
pub mod i18n;
pub mod serialization;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CorsConfig, Environment, JwtConfig, LoggingConfig,
    MessageSourceConfig, ServerConfig,
};
pub use errors::{http_status, I18nError, SerializationError};
pub use i18n::{BundleMessageSource, I18nContext, MessageResolver, MessageSource};
pub use types::{ApiResponse, Language, MessageCode};
