//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0, // Use all CPU cores
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from `SERVER_HOST` and `SERVER_PORT`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            ..defaults
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Enable CORS
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,

    /// Allowed origins; `*` mirrors any origin
    #[serde(default = "wildcard")]
    pub allowed_origins: Vec<String>,

    /// Allowed methods
    #[serde(default = "default_allowed_methods")]
    pub allowed_methods: Vec<String>,

    /// Allowed headers; `*` allows any
    #[serde(default = "wildcard")]
    pub allowed_headers: Vec<String>,

    /// Headers readable by browser clients
    #[serde(default = "default_exposed_headers")]
    pub exposed_headers: Vec<String>,

    /// Allow credentials
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_cors_enabled(),
            allowed_origins: wildcard(),
            allowed_methods: default_allowed_methods(),
            allowed_headers: wildcard(),
            exposed_headers: default_exposed_headers(),
            allow_credentials: default_allow_credentials(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Restrict origins to an explicit list
    pub fn with_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    pub fn allows_any_header(&self) -> bool {
        self.allowed_headers.iter().any(|header| header == "*")
    }
}

fn default_max_payload_size() -> usize {
    10 * 1024 * 1024 // 10 MB
}

fn default_cors_enabled() -> bool {
    true
}

fn default_allow_credentials() -> bool {
    true
}

fn wildcard() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_allowed_methods() -> Vec<String> {
    vec![
        "GET".to_string(),
        "POST".to_string(),
        "PUT".to_string(),
        "DELETE".to_string(),
        "OPTIONS".to_string(),
    ]
}

fn default_exposed_headers() -> Vec<String> {
    vec!["Content-Language".to_string()]
}

fn default_max_age() -> usize {
    3600 // 1 hour
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, 0);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_cors_config_default() {
        let config = CorsConfig::default();
        assert!(config.enabled);
        assert!(config.allows_any_origin());
        assert!(config.allows_any_header());
        assert!(config.allow_credentials);
        assert_eq!(config.allowed_methods, vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"]);
        assert_eq!(config.exposed_headers, vec!["Content-Language"]);
        assert_eq!(config.max_age, 3600);
    }

    #[test]
    fn test_cors_with_origins() {
        let config = CorsConfig::default().with_origins(["https://hse.example.com"]);
        assert!(!config.allows_any_origin());
        assert_eq!(config.allowed_origins, vec!["https://hse.example.com"]);
    }
}
