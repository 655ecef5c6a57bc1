//! Per-request locale negotiation
//!
//! Picks the request locale from the `lang` query parameter, then
//! `Accept-Language`, then the configured default, runs the rest of the
//! pipeline inside an [`I18nContext`] scope and echoes the choice in
//! `Content-Language`.

use std::collections::HashMap;
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderValue, ACCEPT_LANGUAGE, CONTENT_LANGUAGE};
use actix_web::{web, Error};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

use hse_shared::i18n::{self, I18nContext, MessageResolver};
use hse_shared::{Language, MessageSourceConfig};

/// Locale negotiation middleware factory
#[derive(Clone)]
pub struct LocaleScope {
    resolver: MessageResolver,
    default_locale: Language,
    param_name: Rc<str>,
}

impl LocaleScope {
    pub fn new(resolver: MessageResolver, config: &MessageSourceConfig) -> Self {
        Self {
            resolver,
            default_locale: config.default_locale,
            param_name: Rc::from(config.param_name.as_str()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for LocaleScope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LocaleScopeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LocaleScopeMiddleware {
            service: Rc::new(service),
            scope: self.clone(),
        }))
    }
}

pub struct LocaleScopeMiddleware<S> {
    service: Rc<S>,
    scope: LocaleScope,
}

impl<S, B> Service<ServiceRequest> for LocaleScopeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let accept_language = req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());
        let locale = negotiate(
            req.query_string(),
            accept_language,
            &self.scope.param_name,
            self.scope.default_locale,
        );

        let context = I18nContext::new(locale, self.scope.resolver.clone());
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let mut res = i18n::context::scope(context, service.call(req)).await?;
            res.headers_mut().insert(
                CONTENT_LANGUAGE,
                HeaderValue::from_static(locale.language_tag()),
            );
            Ok(res)
        })
    }
}

/// Locale for a request
///
/// A `param_name` query value that names a supported locale wins over the
/// header; unsupported or malformed values are ignored.
pub fn negotiate(
    query: &str,
    accept_language: Option<&str>,
    param_name: &str,
    default: Language,
) -> Language {
    let from_param = web::Query::<HashMap<String, String>>::from_query(query)
        .ok()
        .and_then(|params| params.get(param_name).and_then(|value| value.parse().ok()));

    from_param
        .or_else(|| accept_language.and_then(Language::from_accept_language))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_overrides_header() {
        assert_eq!(
            negotiate("lang=en_US", Some("zh-CN"), "lang", Language::Chinese),
            Language::English
        );
        assert_eq!(
            negotiate("page=1&lang=zh", Some("en-US"), "lang", Language::English),
            Language::Chinese
        );
    }

    #[test]
    fn test_header_used_without_param() {
        assert_eq!(
            negotiate("", Some("fr-FR,en;q=0.8,zh;q=0.5"), "lang", Language::Chinese),
            Language::English
        );
    }

    #[test]
    fn test_unsupported_values_fall_back_to_default() {
        assert_eq!(
            negotiate("lang=fr", Some("de-DE"), "lang", Language::Chinese),
            Language::Chinese
        );
        assert_eq!(negotiate("lang=%zz", None, "lang", Language::English), Language::English);
    }

    #[test]
    fn test_custom_param_name() {
        assert_eq!(
            negotiate("locale=en-US&lang=zh", None, "locale", Language::Chinese),
            Language::English
        );
    }
}
