//! CORS policy from [`CorsConfig`]
//!
//! The default policy mirrors any origin with credentials, allows the usual
//! verbs and any header, exposes `Content-Language` so browser clients can
//! read the negotiated locale, and caches preflights for an hour.

use actix_cors::Cors;
use actix_web::http::Method;
use tracing::{info, warn};

use hse_shared::CorsConfig;

/// Build the CORS middleware for `config`
///
/// A disabled config yields the actix default, which rejects cross-origin
/// requests.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        info!("CORS disabled, cross-origin requests will be rejected");
        return Cors::default();
    }

    let mut cors = Cors::default();

    if config.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors = cors.allowed_methods(parse_methods(&config.allowed_methods));

    if config.allows_any_header() {
        cors = cors.allow_any_header();
    } else {
        cors = cors.allowed_headers(config.allowed_headers.iter().map(String::as_str));
    }

    if !config.exposed_headers.is_empty() {
        cors = cors.expose_headers(config.exposed_headers.iter().map(String::as_str));
    }

    cors = cors.max_age(config.max_age);

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

fn parse_methods(methods: &[String]) -> Vec<Method> {
    methods
        .iter()
        .filter_map(|name| match Method::from_bytes(name.trim().to_uppercase().as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                warn!("Ignoring invalid CORS method: {}", name);
                None
            }
        })
        .collect()
}
