//! Shared error types and the HTTP status table

use thiserror::Error;

/// HTTP status codes known to the platform
///
/// Failures are reported in the envelope `code` and always travel with
/// HTTP 200; these constants exist for adopters that route on status.
pub mod http_status {
    pub const SUCCESS: u16 = 200;
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const ERROR: u16 = 500;
}

/// Failures while loading or reading message bundles
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Failed to read message bundle {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse message bundle {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Message source unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the serialization policy entry points
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
