//! Localized message resolution

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::format::format_message;
use super::source::MessageSource;
use crate::types::{Language, MessageCode};

/// Resolves bundle keys to display text
///
/// Cheap to clone; the message source is shared. Resolution never fails:
/// a missing key, an absent source or a failing source all degrade to a
/// fallback string.
#[derive(Clone)]
pub struct MessageResolver {
    source: Option<Arc<dyn MessageSource>>,
    default_locale: Language,
}

impl MessageResolver {
    pub fn new(source: Arc<dyn MessageSource>, default_locale: Language) -> Self {
        Self {
            source: Some(source),
            default_locale,
        }
    }

    /// Resolver without a message source; every lookup yields its fallback
    pub fn unconfigured() -> Self {
        Self {
            source: None,
            default_locale: Language::default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    pub fn default_locale(&self) -> Language {
        self.default_locale
    }

    /// Text for `key` in `locale`, or the interpolated `default` when the
    /// key is unknown
    ///
    /// Without a source the `default` is returned untouched.
    pub fn resolve(&self, key: &str, args: &[String], default: &str, locale: Language) -> String {
        let Some(source) = &self.source else {
            return default.to_string();
        };
        match source.lookup(key, locale) {
            Ok(Some(pattern)) => format_message(&pattern, args),
            Ok(None) => format_message(default, args),
            Err(e) => {
                warn!("Message lookup for '{}' failed: {}", key, e);
                default.to_string()
            }
        }
    }

    /// Text for `key` in an explicit `locale`
    ///
    /// An unknown key resolves to the key itself; without a source the
    /// result is empty.
    pub fn resolve_in(&self, key: &str, args: &[String], locale: Language) -> String {
        let Some(source) = &self.source else {
            return String::new();
        };
        match source.lookup(key, locale) {
            Ok(Some(pattern)) => format_message(&pattern, args),
            Ok(None) => key.to_string(),
            Err(e) => {
                warn!("Message lookup for '{}' failed: {}", key, e);
                key.to_string()
            }
        }
    }

    /// Display text of a catalog entry, empty when unresolvable
    pub fn code_message(&self, code: MessageCode, args: &[String], locale: Language) -> String {
        self.resolve(code.key(), args, "", locale)
    }
}

impl Default for MessageResolver {
    fn default() -> Self {
        Self::unconfigured()
    }
}

impl fmt::Debug for MessageResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageResolver")
            .field("configured", &self.is_configured())
            .field("default_locale", &self.default_locale)
            .finish()
    }
}
