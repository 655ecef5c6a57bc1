//! Ambient per-request locale
//!
//! The HTTP layer runs every request inside [`scope`], after which code
//! anywhere down the call stack can resolve messages without threading the
//! locale and resolver through its signatures. Outside a scope the helpers
//! behave as if no message source were configured.

use std::future::Future;

use super::MessageResolver;
use crate::types::Language;

tokio::task_local! {
    static CONTEXT: I18nContext;
}

/// Locale and resolver of the current request
#[derive(Debug, Clone)]
pub struct I18nContext {
    pub locale: Language,
    pub resolver: MessageResolver,
}

impl I18nContext {
    pub fn new(locale: Language, resolver: MessageResolver) -> Self {
        Self { locale, resolver }
    }
}

/// Run `future` with `context` as the ambient locale
pub async fn scope<F: Future>(context: I18nContext, future: F) -> F::Output {
    CONTEXT.scope(context, future).await
}

/// Synchronous variant of [`scope`]
pub fn sync_scope<R>(context: I18nContext, f: impl FnOnce() -> R) -> R {
    CONTEXT.sync_scope(context, f)
}

/// Snapshot of the ambient context, if any
pub fn current() -> Option<I18nContext> {
    CONTEXT.try_with(Clone::clone).ok()
}

/// Ambient locale, or the default locale outside a request
pub fn current_locale() -> Language {
    CONTEXT.try_with(|ctx| ctx.locale).unwrap_or_default()
}

/// Resolve `key` in the ambient locale, empty when unresolvable
pub fn message(key: &str, args: &[String]) -> String {
    message_or(key, args, "")
}

/// Resolve `key` in the ambient locale with a caller supplied fallback
pub fn message_or(key: &str, args: &[String], default: &str) -> String {
    CONTEXT
        .try_with(|ctx| ctx.resolver.resolve(key, args, default, ctx.locale))
        .unwrap_or_else(|_| default.to_string())
}

/// Resolve `key` in an explicit locale using the ambient resolver
///
/// Unknown keys resolve to the key; outside a request the result is empty.
pub fn message_in(key: &str, args: &[String], locale: Language) -> String {
    CONTEXT
        .try_with(|ctx| ctx.resolver.resolve_in(key, args, locale))
        .unwrap_or_default()
}
