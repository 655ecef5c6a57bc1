//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing secret and lifetime
//! - `cache` - Redis configuration
//! - `environment` - Environment detection and logging configuration
//! - `i18n` - Message bundles and locale negotiation
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod cache;
pub mod environment;
pub mod i18n;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use i18n::MessageSourceConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Message source configuration
    #[serde(default)]
    pub i18n: MessageSourceConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
            i18n: MessageSourceConfig::default(),
            cache: CacheConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
            i18n: MessageSourceConfig::from_env(),
            cache: CacheConfig::from_env(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Reasons this configuration must not serve traffic
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be overridden in production".to_string());
        }
        if self.jwt.secret.len() < 32 {
            return Err(format!(
                "JWT secret must be at least 32 bytes, got {}",
                self.jwt.secret.len()
            ));
        }
        if self.jwt.expiration_ms <= 0 {
            return Err("JWT expiration must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    #[test]
    fn test_default_config_is_valid_for_development() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let mut config = AppConfig::default();
        config.environment = Environment::Production;
        assert!(config.validate().is_err());

        config.jwt = JwtConfig::new("p".repeat(64));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_short_secret_rejected() {
        let config = AppConfig {
            jwt: JwtConfig::new("short"),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("32 bytes"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            environment = "staging"

            [i18n]
            default_locale = "en_US"
            "#,
        )
        .unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.i18n.default_locale, Language::English);
        assert_eq!(config.server.port, 8080);
        assert!(config.jwt.is_using_default_secret());
    }
}
