//! HTTP routes
//!
//! - `/health` - liveness envelope
//! - `/api/auth` - token login and the current user
//! - `/api/example` - envelope, i18n and serialization demos

pub mod auth;
pub mod example;
pub mod health;

use actix_web::web;

use hse_shared::{ApiResponse, MessageCode};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(web::scope("/api/auth").configure(auth::configure))
        .service(web::scope("/api/example").configure(example::configure));
}

/// Fallback for unmatched paths: `0005` in the request locale
pub async fn not_found() -> ApiResponse<()> {
    ApiResponse::fail_code(MessageCode::NotFound)
}
