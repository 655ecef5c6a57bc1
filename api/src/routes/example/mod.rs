//! Demonstration endpoints for the response, i18n and JSON conventions

pub mod i18n;
pub mod json;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/json").configure(json::configure))
        .configure(i18n::configure);
}
