//! HTTP boundary for HSE backends
//!
//! Wires the shared conventions into actix-web: per-request locale
//! negotiation, the error-to-envelope mapper, validating extractors and
//! the demo routes.

pub mod app;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
