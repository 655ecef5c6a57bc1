//! Token signing configuration

use serde::{Deserialize, Serialize};

/// Development-only signing secret; production startup refuses it
pub const DEFAULT_JWT_SECRET: &str = "hse-boot-secret-key-for-jwt-token-generation-minimum-512-bits";

/// Default token lifetime: 24 hours
pub const DEFAULT_JWT_EXPIRATION_MS: i64 = 86_400_000;

/// JWT authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret; its length selects HS256/HS384/HS512
    pub secret: String,

    /// Token lifetime in milliseconds
    #[serde(default = "default_expiration")]
    pub expiration_ms: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string(),
            expiration_ms: default_expiration(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    pub fn with_expiration_ms(mut self, expiration_ms: i64) -> Self {
        self.expiration_ms = expiration_ms;
        self
    }

    /// Create from `JWT_SECRET` and `JWT_EXPIRATION` (milliseconds)
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let expiration_ms = std::env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_JWT_EXPIRATION_MS);

        Self { secret, expiration_ms }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

fn default_expiration() -> i64 {
    DEFAULT_JWT_EXPIRATION_MS
}
