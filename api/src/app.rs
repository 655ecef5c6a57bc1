//! Application state and factory
//!
//! Request pipeline, outermost first:
//! `TracingLogger` -> CORS -> [`LocaleScope`] -> [`CatchPanic`] -> routes.
//! Errors and panics are rendered by `CatchPanic` while the locale scope
//! is still active, so every envelope is localized.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use tracing::info;
use tracing_actix_web::TracingLogger;

use hse_core::services::TokenService;
use hse_shared::{AppConfig, BundleMessageSource, CorsConfig, MessageResolver, MessageSourceConfig};

use crate::handlers::{form_config, json_config, path_config, query_config};
use crate::middleware::{create_cors, CatchPanic, LocaleScope};
use crate::routes;

/// Everything the app factory needs, built once per process
#[derive(Clone)]
pub struct AppState {
    pub resolver: MessageResolver,
    pub tokens: web::Data<TokenService>,
    pub i18n: MessageSourceConfig,
    pub cors: CorsConfig,
    pub max_payload_size: usize,
}

impl AppState {
    /// Load message bundles and build the token service
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let source = BundleMessageSource::load(&config.i18n)?;
        let resolver = MessageResolver::new(Arc::new(source), config.i18n.default_locale);
        let tokens = TokenService::new(&config.jwt)?;

        info!(
            algorithm = ?tokens.algorithm(),
            expiration_ms = tokens.expiration_ms(),
            default_locale = %config.i18n.default_locale.locale(),
            "Application state initialized"
        );

        Ok(Self {
            resolver,
            tokens: web::Data::new(tokens),
            i18n: config.i18n.clone(),
            cors: config.cors.clone(),
            max_payload_size: config.server.max_payload_size,
        })
    }
}

/// Create and configure the application
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state.tokens.clone())
        .app_data(json_config(state.max_payload_size))
        .app_data(form_config(state.max_payload_size))
        .app_data(query_config())
        .app_data(path_config())
        // wrap order is reversed: the last wrap sees the request first
        .wrap(CatchPanic)
        .wrap(LocaleScope::new(state.resolver.clone(), &state.i18n))
        .wrap(create_cors(&state.cors))
        .wrap(TracingLogger::default())
        .configure(routes::configure)
        .default_service(web::route().to(routes::not_found))
}
