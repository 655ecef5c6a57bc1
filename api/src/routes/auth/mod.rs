//! Token login demo
//!
//! Accounts are a fixed in-memory table; the point is the token flow and
//! the codes it produces, not credential storage.

pub mod login;
pub mod logout;
pub mod me;

use actix_web::web;

pub use login::{LoginRequest, DEMO_ACCOUNTS};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(login::login))
        .route("/me", web::get().to(me::me))
        .route("/logout", web::post().to(logout::logout));
}
